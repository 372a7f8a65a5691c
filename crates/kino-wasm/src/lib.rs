//! Kino WASM - Browser capability detection for the web player
//!
//! Runs the core detector against the live page:
//! - `detectEnvironment` returns the capability flags as a plain object
//! - `KinoEnvironment` holds one loaded player environment
//!
//! ```javascript
//! import init, { detectEnvironment, KinoEnvironment } from '@kino/wasm';
//!
//! await init();
//! const flags = detectEnvironment('html5-force-mp4');
//! const env = new KinoEnvironment({ pcode: 'abc', tweaks: '' });
//! console.log(env.device, env.uiParadigm, env.locale());
//! ```

use wasm_bindgen::prelude::*;

mod browser_probe;

pub use browser_probe::BrowserProbe;

use kino_core::{PlayerEnvironment, PlayerParams, Tweaks};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"[Kino WASM] Initialized".into());
}

/// Library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn current_probe() -> Result<BrowserProbe, JsValue> {
    BrowserProbe::current().ok_or_else(|| JsValue::from_str("No browser window available"))
}

/// Detect capability flags for the current page
#[wasm_bindgen(js_name = detectEnvironment)]
pub fn detect_environment(tweaks: Option<String>) -> Result<JsValue, JsValue> {
    let probe = current_probe()?;
    let input = probe.snapshot(Tweaks::parse(tweaks.as_deref().unwrap_or_default()));
    to_js(&kino_core::detect(&input, &probe))
}

/// Player environment loaded for the current page
#[wasm_bindgen]
pub struct KinoEnvironment {
    inner: PlayerEnvironment,
}

#[wasm_bindgen]
impl KinoEnvironment {
    /// Load from a params object (`pcode`, `tweaks`, server overrides, ...)
    #[wasm_bindgen(constructor)]
    pub fn new(params: JsValue) -> Result<KinoEnvironment, JsValue> {
        let params: PlayerParams = if params.is_undefined() || params.is_null() {
            PlayerParams::default()
        } else {
            serde_wasm_bindgen::from_value(params).map_err(|e| JsValue::from_str(&e.to_string()))?
        };

        let probe = current_probe()?;
        let input = probe.snapshot(Tweaks::default());
        let inner = PlayerEnvironment::load(input, &probe, params)
            .map_err(|e| JsValue::from_str(&format!("{}: {}", e.error_code(), e)))?;

        Ok(Self { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn guid(&self) -> String {
        self.inner.guid.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn device(&self) -> String {
        self.inner.flags.device.to_string()
    }

    #[wasm_bindgen(getter, js_name = uiParadigm)]
    pub fn ui_paradigm(&self) -> String {
        self.inner.flags.ui_paradigm.to_string()
    }

    /// Playable video types, e.g. `["mp4", "m3u8"]`
    #[wasm_bindgen(getter, js_name = supportedVideoTypes)]
    pub fn supported_video_types(&self) -> Vec<String> {
        self.inner
            .flags
            .supported_video_types
            .iter()
            .map(|t| t.as_str().to_string())
            .collect()
    }

    /// Full capability flags as a plain object
    #[wasm_bindgen(getter)]
    pub fn flags(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.flags)
    }

    /// Resolved backend endpoints as a plain object
    #[wasm_bindgen(getter)]
    pub fn endpoints(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.endpoints)
    }

    /// Named boolean flag, `undefined` for unknown names
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.inner.flags.flag(name)
    }

    #[wasm_bindgen(js_name = requiredInEnvironment)]
    pub fn required_in_environment(&self, feature: &str) -> bool {
        self.inner.required_in_environment(feature)
    }

    #[wasm_bindgen(js_name = setLocale)]
    pub fn set_locale(&mut self, locale: &str) {
        self.inner.set_locale(locale);
    }

    pub fn locale(&self) -> String {
        self.inner.locale()
    }

    /// Convert to JSON string
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.inner).unwrap_or_default()
    }
}
