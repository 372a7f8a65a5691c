//! Detected capability flags

use super::classify::{Device, UiParadigm};
use super::sniff::{BrowserFlags, PlatformFlags};
use super::video::{VideoProfile, VideoType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Player modules an environment needs loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    Html5Playback,
    Ads,
}

impl Feature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Html5Playback => "html5-playback",
            Feature::Ads => "ads",
        }
    }
}

/// Name of the rule that produced each classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decisions {
    pub video_types: &'static str,
    pub ui_paradigm: &'static str,
    pub device: &'static str,
}

/// Capabilities of one browser environment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapabilityFlags {
    #[serde(flatten)]
    pub platform: PlatformFlags,
    #[serde(flatten)]
    pub browser: BrowserFlags,

    /// Video elements expose `canPlayType`
    pub supports_video: bool,
    pub supports_cors: bool,
    pub supports_touch: bool,
    pub supports_cookies: bool,
    pub supports_ads: bool,
    /// More than one video element can play in the page
    pub supports_multi_video: bool,
    pub supports_mid_roll_ads: bool,
    /// Playback must start from a user gesture
    pub allow_gesture: bool,
    pub allow_auto_play: bool,
    pub is_ssl: bool,
    pub chrome_extension_enabled: bool,

    pub device: Device,
    pub ui_paradigm: UiParadigm,
    pub supported_video_types: BTreeSet<VideoType>,
    pub supported_video_profile: Option<VideoProfile>,
    pub required_features: Vec<Feature>,
    pub document_domain: String,

    pub decisions: Decisions,
}

impl CapabilityFlags {
    /// Every boolean flag by name
    pub fn flags(&self) -> BTreeMap<&'static str, bool> {
        let p = &self.platform;
        let b = &self.browser;
        BTreeMap::from([
            ("is_windows", p.is_windows),
            ("is_mac_os", p.is_mac_os),
            ("is_mac_os_lion_or_later", p.is_mac_os_lion_or_later),
            ("is_ios", p.is_ios),
            ("is_iphone", p.is_iphone),
            ("is_ipad", p.is_ipad),
            ("is_android", p.is_android),
            ("is_android4_plus", p.is_android4_plus),
            ("is_rim_device", p.is_rim_device),
            ("is_win_phone", p.is_win_phone),
            ("is_smart_tv", p.is_smart_tv),
            ("is_kindle_hd", p.is_kindle_hd),
            ("is_firefox", b.is_firefox),
            ("is_chrome", b.is_chrome),
            ("is_safari", b.is_safari),
            ("is_ie", b.is_ie),
            ("is_ie11_plus", b.is_ie11_plus),
            ("supports_video", self.supports_video),
            ("supports_cors", self.supports_cors),
            ("supports_touch", self.supports_touch),
            ("supports_cookies", self.supports_cookies),
            ("supports_ads", self.supports_ads),
            ("supports_multi_video", self.supports_multi_video),
            ("supports_mid_roll_ads", self.supports_mid_roll_ads),
            ("allow_gesture", self.allow_gesture),
            ("allow_auto_play", self.allow_auto_play),
            ("is_ssl", self.is_ssl),
            ("chrome_extension_enabled", self.chrome_extension_enabled),
        ])
    }

    /// Look up one boolean flag by name
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.flags().get(name).copied()
    }

    /// Whether the environment needs the named player module
    pub fn required_in_environment(&self, feature: &str) -> bool {
        self.required_features.iter().any(|f| f.as_str() == feature)
    }

    pub fn supports_video_type(&self, video_type: VideoType) -> bool {
        self.supported_video_types.contains(&video_type)
    }
}
