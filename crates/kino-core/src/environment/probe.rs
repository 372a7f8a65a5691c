//! Host capability probes
//!
//! The detector never touches a browser directly. Hosts answer these
//! questions instead: the wasm crate with real DOM calls, tests and the CLI
//! with canned answers.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};
use tracing::debug;

/// HLS manifest MIME types, either of which counts as HLS support
pub const MIME_HLS: [&str; 2] = ["application/vnd.apple.mpegurl", "application/x-mpegURL"];
pub const MIME_MP4: &str = "video/mp4";
pub const MIME_WEBM: &str = "video/webm";

/// Questions the detector asks the host environment
pub trait HostProbe {
    /// Whether a video element reports it can play `mime`
    fn can_play_type(&self, mime: &str) -> Result<bool>;

    /// Whether video elements expose `canPlayType` at all
    fn supports_video_element(&self) -> Result<bool> {
        Ok(true)
    }

    /// Whether XHR supports credentialed cross-origin requests
    fn supports_cors(&self) -> Result<bool> {
        Ok(false)
    }

    /// Whether the document exposes touch events
    fn supports_touch(&self) -> Result<bool> {
        Ok(false)
    }

    /// Whether cookies can be written and read back
    fn supports_cookies(&self) -> Result<bool> {
        Ok(false)
    }

    /// Whether an element with this id exists in the document
    fn has_element(&self, _id: &str) -> Result<bool> {
        Ok(false)
    }
}

/// Collapse a probe answer to a plain value, logging failures
pub(crate) fn answer_or<T>(capability: &'static str, result: Result<T>, default: T) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            debug!(capability, error = %e, "Probe failed, using safe default");
            default
        }
    }
}

/// Probe answering from fixed data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticProbe {
    /// MIME types the host claims to play
    pub playable: Vec<String>,
    pub video_element: bool,
    pub cors: bool,
    pub touch: bool,
    pub cookies: bool,
    /// Element ids present in the document
    pub elements: Vec<String>,
}

impl Default for StaticProbe {
    fn default() -> Self {
        Self {
            playable: Vec::new(),
            video_element: true,
            cors: true,
            touch: false,
            cookies: true,
            elements: Vec::new(),
        }
    }
}

impl StaticProbe {
    /// Probe that plays exactly these MIME types
    pub fn playing<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            playable: types.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Probe for a host with no usable video element
    pub fn without_video() -> Self {
        Self {
            video_element: false,
            ..Default::default()
        }
    }

    pub fn with_touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }
}

impl HostProbe for StaticProbe {
    fn can_play_type(&self, mime: &str) -> Result<bool> {
        Ok(self.playable.iter().any(|t| t.eq_ignore_ascii_case(mime)))
    }

    fn supports_video_element(&self) -> Result<bool> {
        Ok(self.video_element)
    }

    fn supports_cors(&self) -> Result<bool> {
        Ok(self.cors)
    }

    fn supports_touch(&self) -> Result<bool> {
        Ok(self.touch)
    }

    fn supports_cookies(&self) -> Result<bool> {
        Ok(self.cookies)
    }

    fn has_element(&self, id: &str) -> Result<bool> {
        Ok(self.elements.iter().any(|e| e == id))
    }
}

/// Probe backed by a codec callback; every other probe takes its default
pub struct CodecProbe<F>(pub F);

impl<F> HostProbe for CodecProbe<F>
where
    F: Fn(&str) -> bool,
{
    /// A panicking callback counts as a failed probe
    fn can_play_type(&self, mime: &str) -> Result<bool> {
        panic::catch_unwind(AssertUnwindSafe(|| (self.0)(mime)))
            .map_err(|_| Error::probe("can_play_type", format!("codec callback panicked for {}", mime)))
    }
}

/// Probe for hosts that cannot answer anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullProbe;

impl HostProbe for NullProbe {
    fn can_play_type(&self, _mime: &str) -> Result<bool> {
        Err(Error::ProbeUnavailable {
            capability: "can_play_type",
        })
    }

    fn supports_video_element(&self) -> Result<bool> {
        Err(Error::ProbeUnavailable {
            capability: "supports_video_element",
        })
    }
}
