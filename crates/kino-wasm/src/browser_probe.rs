//! Browser probe - answers capability questions from the live DOM
//!
//! Also snapshots the navigator and window into an `EnvironmentInput`.

use js_sys::Reflect;
use kino_core::{EnvironmentInput, Error, HostProbe, Result, Tweaks};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlVideoElement, Window, XmlHttpRequest};

fn js_reason(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn has_property(target: &JsValue, name: &str) -> Result<bool> {
    Reflect::has(target, &JsValue::from_str(name))
        .map_err(|e| Error::probe("reflect", js_reason(e)))
}

fn property(target: &JsValue, name: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// `HostProbe` backed by `window` and `document`
pub struct BrowserProbe {
    window: Window,
    document: Document,
    video: Option<HtmlVideoElement>,
}

impl BrowserProbe {
    /// Probe for the current page, `None` outside a browser window
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let video = document
            .create_element("video")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok());

        Some(Self {
            window,
            document,
            video,
        })
    }

    /// Read navigator, window, and document state
    pub fn snapshot(&self, tweaks: Tweaks) -> EnvironmentInput {
        let navigator = self.window.navigator();
        let mut input = EnvironmentInput::new(
            navigator.user_agent().unwrap_or_default(),
            navigator.platform().unwrap_or_default(),
            navigator.app_version().unwrap_or_default(),
        );

        let width = self
            .window
            .outer_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        let height = self
            .window
            .outer_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0);
        input = input
            .with_window(width as u32, height as u32)
            .with_pixel_ratio(self.window.device_pixel_ratio())
            .with_orientation(
                property(self.window.as_ref(), "orientation")
                    .and_then(|o| o.as_f64())
                    .map(|o| o as i32),
            )
            .with_secure_protocol(
                self.window
                    .location()
                    .protocol()
                    .map(|p| p == "https:")
                    .unwrap_or(false),
            )
            .with_tweaks(tweaks);

        input.document_domain = property(self.document.as_ref(), "domain").and_then(|d| d.as_string());
        input.document_language = self
            .document
            .document_element()
            .and_then(|el| el.get_attribute("lang"));
        input.navigator_language = navigator.language();
        input
    }
}

impl HostProbe for BrowserProbe {
    fn can_play_type(&self, mime: &str) -> Result<bool> {
        let video = self
            .video
            .as_ref()
            .ok_or(Error::ProbeUnavailable { capability: "can_play_type" })?;
        Ok(!video.can_play_type(mime).is_empty())
    }

    fn supports_video_element(&self) -> Result<bool> {
        match &self.video {
            Some(video) => has_property(video.as_ref(), "canPlayType"),
            None => Ok(false),
        }
    }

    fn supports_cors(&self) -> Result<bool> {
        let xhr = XmlHttpRequest::new().map_err(|e| Error::probe("supports_cors", js_reason(e)))?;
        has_property(xhr.as_ref(), "withCredentials")
    }

    fn supports_touch(&self) -> Result<bool> {
        let root = self
            .document
            .document_element()
            .ok_or(Error::ProbeUnavailable { capability: "supports_touch" })?;
        has_property(root.as_ref(), "ontouchstart")
    }

    fn supports_cookies(&self) -> Result<bool> {
        Ok(property(self.window.navigator().as_ref(), "cookieEnabled")
            .and_then(|v| v.as_bool())
            .unwrap_or(false))
    }

    fn has_element(&self, id: &str) -> Result<bool> {
        Ok(self.document.get_element_by_id(id).is_some())
    }
}
