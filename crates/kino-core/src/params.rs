//! Publisher player parameters and tweaks
//!
//! Publishers embed the player with a small parameter object. Anything they
//! leave out falls back to the defaults below.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tweak name that lets Android 4+ play HLS
pub const TWEAK_ANDROID_ENABLE_HLS: &str = "android-enable-hls";
/// Tweak name that forces MP4 playback everywhere
pub const TWEAK_HTML5_FORCE_MP4: &str = "html5-force-mp4";

/// Publisher overrides that change capability detection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Tweaks {
    /// Allow HLS on Android 4+ despite its unreliable support
    pub android_enable_hls: bool,
    /// Only ever play MP4
    pub html5_force_mp4: bool,
}

impl Tweaks {
    /// Parse a comma-separated tweak list, ignoring unknown names
    pub fn parse(list: &str) -> Self {
        let mut tweaks = Tweaks::default();
        for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match name {
                TWEAK_ANDROID_ENABLE_HLS => tweaks.android_enable_hls = true,
                TWEAK_HTML5_FORCE_MP4 => tweaks.html5_force_mp4 = true,
                other => debug!(tweak = other, "Ignoring unknown tweak"),
            }
        }
        tweaks
    }

    /// Union of two tweak sets
    pub fn merge(self, other: Tweaks) -> Self {
        Self {
            android_enable_hls: self.android_enable_hls || other.android_enable_hls,
            html5_force_mp4: self.html5_force_mp4 || other.html5_force_mp4,
        }
    }

    /// Enabled tweak names
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.android_enable_hls {
            names.push(TWEAK_ANDROID_ENABLE_HLS);
        }
        if self.html5_force_mp4 {
            names.push(TWEAK_HTML5_FORCE_MP4);
        }
        names
    }
}

/// Parameters passed to `configure_publisher`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PublisherParameters {
    pub pcode: String,
    #[serde(alias = "playerBrandingId")]
    pub player_branding_id: String,
    pub debug: String,
}

/// Player parameters supplied by the embedding page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerParams {
    /// Provider code
    pub pcode: String,
    /// Player branding id
    #[serde(alias = "playerBrandingId")]
    pub player_branding_id: String,
    pub debug: String,
    /// Comma-separated tweak names
    pub tweaks: String,
    /// Deployment environment ("production", "staging", ...)
    pub environment: Option<String>,
    /// Max seconds to wait for ads metadata
    #[serde(alias = "maxAdsTimeout")]
    pub max_ads_timeout: u32,
    /// Max VAST wrapper levels followed before an inline ad
    #[serde(alias = "maxVastWrapperDepth")]
    pub max_vast_wrapper_depth: u32,
    /// Minimum seekable window for live streams, in seconds
    #[serde(alias = "minLiveSeekWindow")]
    pub min_live_seek_window: u32,

    pub api_server: Option<String>,
    pub api_ssl_server: Option<String>,
    pub auth_server: Option<String>,
    pub auth_ssl_server: Option<String>,
    pub analytics_server: Option<String>,
    pub analytics_ssl_server: Option<String>,
    pub hastur_server: Option<String>,
    pub hastur_ssl_server: Option<String>,
}

impl Default for PlayerParams {
    fn default() -> Self {
        Self {
            pcode: String::new(),
            player_branding_id: String::new(),
            debug: String::new(),
            tweaks: String::new(),
            environment: None,
            max_ads_timeout: 5,
            max_vast_wrapper_depth: 3,
            min_live_seek_window: 10,
            api_server: None,
            api_ssl_server: None,
            auth_server: None,
            auth_ssl_server: None,
            analytics_server: None,
            analytics_ssl_server: None,
            hastur_server: None,
            hastur_ssl_server: None,
        }
    }
}

impl PlayerParams {
    /// Parse parameters from a JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str::<Self>(json)
            .map(Self::with_limit_defaults)
            .map_err(|e| Error::InvalidConfig(format!("player params: {}", e)))
    }

    /// Replace zero ad and live-seek limits with their defaults
    pub fn with_limit_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.max_ads_timeout == 0 {
            self.max_ads_timeout = defaults.max_ads_timeout;
        }
        if self.max_vast_wrapper_depth == 0 {
            self.max_vast_wrapper_depth = defaults.max_vast_wrapper_depth;
        }
        if self.min_live_seek_window == 0 {
            self.min_live_seek_window = defaults.min_live_seek_window;
        }
        self
    }

    /// Fill publisher identity fields that are still empty
    pub fn configure_publisher(&mut self, parameters: &PublisherParameters) {
        fill_if_empty(&mut self.pcode, &parameters.pcode);
        fill_if_empty(&mut self.player_branding_id, &parameters.player_branding_id);
        fill_if_empty(&mut self.debug, &parameters.debug);
    }

    /// True once both the provider code and branding id are known
    pub fn is_publisher_configured(&self) -> bool {
        !self.pcode.is_empty() && !self.player_branding_id.is_empty()
    }

    /// True if the environment name starts with "prod" (any case)
    pub fn is_prod(&self) -> bool {
        self.environment
            .as_deref()
            .and_then(|env| env.get(..4))
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("prod"))
    }

    /// Parsed tweak set
    pub fn tweaks(&self) -> Tweaks {
        Tweaks::parse(&self.tweaks)
    }
}

fn fill_if_empty(field: &mut String, value: &str) {
    if field.is_empty() {
        *field = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PlayerParams::default();
        assert_eq!(params.max_ads_timeout, 5);
        assert_eq!(params.max_vast_wrapper_depth, 3);
        assert_eq!(params.min_live_seek_window, 10);
        assert_eq!(params.tweaks(), Tweaks::default());
    }

    #[test]
    fn test_tweaks_parse() {
        let tweaks = Tweaks::parse(" android-enable-hls , unknown-tweak,html5-force-mp4");
        assert!(tweaks.android_enable_hls);
        assert!(tweaks.html5_force_mp4);

        let none = Tweaks::parse("");
        assert!(!none.android_enable_hls);
        assert!(!none.html5_force_mp4);
    }

    #[test]
    fn test_tweak_names() {
        let tweaks = Tweaks::parse("html5-force-mp4");
        assert_eq!(tweaks.names(), vec![TWEAK_HTML5_FORCE_MP4]);
    }

    #[test]
    fn test_from_json_partial() {
        let params =
            PlayerParams::from_json(r#"{"pcode":"abc","tweaks":"html5-force-mp4","max_ads_timeout":8}"#)
                .unwrap();
        assert_eq!(params.pcode, "abc");
        assert_eq!(params.max_ads_timeout, 8);
        assert_eq!(params.max_vast_wrapper_depth, 3);
        assert!(params.tweaks().html5_force_mp4);
    }

    #[test]
    fn test_from_json_page_keys() {
        let params = PlayerParams::from_json(
            r#"{"pcode":"p1","playerBrandingId":"b1","maxAdsTimeout":0,"maxVastWrapperDepth":6,"minLiveSeekWindow":0}"#,
        )
        .unwrap();
        assert_eq!(params.player_branding_id, "b1");
        assert!(params.is_publisher_configured());
        assert_eq!(params.max_ads_timeout, 5);
        assert_eq!(params.max_vast_wrapper_depth, 6);
        assert_eq!(params.min_live_seek_window, 10);

        let publisher: PublisherParameters =
            serde_json::from_str(r#"{"pcode":"p2","playerBrandingId":"b2"}"#).unwrap();
        let mut params = PlayerParams::default();
        params.configure_publisher(&publisher);
        assert_eq!(params.player_branding_id, "b2");
    }

    #[test]
    fn test_from_json_invalid() {
        let err = PlayerParams::from_json("{not json").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_configure_publisher_keeps_existing() {
        let mut params = PlayerParams {
            pcode: "embedded".into(),
            ..Default::default()
        };
        assert!(!params.is_publisher_configured());

        params.configure_publisher(&PublisherParameters {
            pcode: "ignored".into(),
            player_branding_id: "brand-1".into(),
            debug: String::new(),
        });

        assert_eq!(params.pcode, "embedded");
        assert_eq!(params.player_branding_id, "brand-1");
        assert!(params.is_publisher_configured());
    }

    #[test]
    fn test_is_prod() {
        let mut params = PlayerParams::default();
        assert!(!params.is_prod());

        params.environment = Some("Production".into());
        assert!(params.is_prod());

        params.environment = Some("staging".into());
        assert!(!params.is_prod());

        params.environment = Some("pr".into());
        assert!(!params.is_prod());
    }
}
