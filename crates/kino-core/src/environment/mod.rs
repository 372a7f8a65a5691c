//! Browser environment capability detection
//!
//! [`detect`] turns a snapshot of the host browser ([`EnvironmentInput`]) and a
//! [`HostProbe`] into an immutable [`CapabilityFlags`]. Detection is a pure
//! function: it never fails, and identical input always gives identical flags.
//! A probe that errors only turns its own capability off.
//!
//! Decisions with priorities (video formats, UI paradigm, device class) are
//! ordered rule tables where the first matching rule wins. The rule that fired
//! is recorded in [`Decisions`].

mod classify;
mod flags;
mod probe;
mod rules;
mod sniff;
mod video;

pub use classify::{Device, UiParadigm};
pub use flags::{CapabilityFlags, Decisions, Feature};
pub use probe::{CodecProbe, HostProbe, NullProbe, StaticProbe, MIME_HLS, MIME_MP4, MIME_WEBM};
pub use sniff::{BrowserFlags, PlatformFlags};
pub use video::{VideoProfile, VideoType};

use crate::params::Tweaks;
use probe::answer_or;
use serde::{Deserialize, Serialize};
use sniff::Facts;
use tracing::debug;

/// Element id the browser extension injects into the page
pub const EXTENSION_ELEMENT_ID: &str = "kino-extension-installed";

/// Snapshot of the host browser taken at player load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentInput {
    /// `navigator.userAgent`
    pub user_agent: String,
    /// `navigator.platform`
    pub platform: String,
    /// `navigator.appVersion`
    pub app_version: String,
    /// Outer window width in CSS pixels
    pub window_width: u32,
    pub window_height: u32,
    pub device_pixel_ratio: f64,
    /// `window.orientation`, absent on most desktops
    pub orientation_degrees: Option<i32>,
    /// Page loaded over https
    pub secure_protocol: bool,
    pub document_domain: Option<String>,
    pub document_language: Option<String>,
    pub navigator_language: Option<String>,
    /// Publisher overrides
    pub tweaks: Tweaks,
}

impl Default for EnvironmentInput {
    fn default() -> Self {
        Self {
            user_agent: String::new(),
            platform: String::new(),
            app_version: String::new(),
            window_width: 0,
            window_height: 0,
            device_pixel_ratio: 1.0,
            orientation_degrees: None,
            secure_protocol: false,
            document_domain: None,
            document_language: None,
            navigator_language: None,
            tweaks: Tweaks::default(),
        }
    }
}

impl EnvironmentInput {
    pub fn new(
        user_agent: impl Into<String>,
        platform: impl Into<String>,
        app_version: impl Into<String>,
    ) -> Self {
        Self {
            user_agent: user_agent.into(),
            platform: platform.into(),
            app_version: app_version.into(),
            ..Default::default()
        }
    }

    /// Build from a user agent alone, deriving `appVersion` the way browsers do
    pub fn from_user_agent(user_agent: &str, platform: &str) -> Self {
        let app_version = user_agent.strip_prefix("Mozilla/").unwrap_or(user_agent);
        Self::new(user_agent, platform, app_version)
    }

    pub fn with_window(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn with_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = ratio;
        self
    }

    pub fn with_orientation(mut self, degrees: Option<i32>) -> Self {
        self.orientation_degrees = degrees;
        self
    }

    pub fn with_secure_protocol(mut self, secure: bool) -> Self {
        self.secure_protocol = secure;
        self
    }

    pub fn with_tweaks(mut self, tweaks: Tweaks) -> Self {
        self.tweaks = tweaks;
        self
    }

    /// Window width in device-independent pixels, if the pixel ratio is usable
    pub fn scaled_width(&self) -> Option<f64> {
        let ratio = self.device_pixel_ratio;
        if ratio.is_finite() && ratio > 0.0 {
            Some(f64::from(self.window_width) / ratio)
        } else {
            None
        }
    }
}

/// Compute capability flags for a browser environment
pub fn detect(input: &EnvironmentInput, probe: &dyn HostProbe) -> CapabilityFlags {
    let facts = Facts::gather(input);
    let platform = facts.platform;
    let browser = facts.browser;

    let (video_rule, supported_video_types) = video::supported_video_types(&facts, probe);
    let (paradigm_rule, ui_paradigm) = classify::ui_paradigm(&facts);
    let (device_rule, device) = classify::device(&facts);

    let supports_ads = !platform.is_win_phone && !facts.legacy_android;
    let supports_multi_video = !(platform.is_android && !browser.is_chrome)
        && !platform.is_ios
        && !facts.legacy_android;
    let supports_mid_roll_ads =
        ui_paradigm == UiParadigm::Desktop && !platform.is_ios && !platform.is_rim_device;

    let mut required_features = vec![Feature::Html5Playback];
    if !facts.android2 && supports_ads {
        required_features.push(Feature::Ads);
    }

    let document_domain = match input.document_domain.as_deref() {
        Some(domain) if !domain.is_empty() => domain.to_string(),
        _ if platform.is_smart_tv => "SmartTV".to_string(),
        _ => "unknown".to_string(),
    };

    debug!(
        device = %device,
        ui_paradigm = %ui_paradigm,
        video_rule,
        paradigm_rule,
        device_rule,
        "Environment classified"
    );

    CapabilityFlags {
        platform,
        browser,
        supports_video: answer_or("supports_video_element", probe.supports_video_element(), false),
        supports_cors: answer_or("supports_cors", probe.supports_cors(), false),
        supports_touch: answer_or("supports_touch", probe.supports_touch(), false),
        supports_cookies: answer_or("supports_cookies", probe.supports_cookies(), false),
        supports_ads,
        supports_multi_video,
        supports_mid_roll_ads,
        allow_gesture: platform.is_ios,
        allow_auto_play: !platform.is_ios && !platform.is_android,
        is_ssl: input.secure_protocol,
        chrome_extension_enabled: answer_or(
            "has_element",
            probe.has_element(EXTENSION_ELEMENT_ID),
            false,
        ),
        device,
        ui_paradigm,
        supported_video_types,
        supported_video_profile: video::supported_video_profile(&facts),
        required_features,
        document_domain,
        decisions: Decisions {
            video_types: video_rule,
            ui_paradigm: paradigm_rule,
            device: device_rule,
        },
    }
}
