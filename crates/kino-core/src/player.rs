//! Player environment
//!
//! Everything the player learns about its host at load time, gathered into one
//! read-only value:
//! - capability flags from [`detect`]
//! - publisher parameters and tweaks
//! - resolved backend endpoints
//! - locale
//! - a per-load GUID

use crate::{
    environment::{detect, CapabilityFlags, EnvironmentInput, HostProbe},
    locale::Locale,
    params::PlayerParams,
    server::ServerEndpoints,
    Result,
};
use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

/// Unique identifier for one player load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerGuid(pub Uuid);

impl PlayerGuid {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlayerGuid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlayerGuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host environment as seen by one player load
#[derive(Debug, Clone, Serialize)]
pub struct PlayerEnvironment {
    pub guid: PlayerGuid,
    pub input: EnvironmentInput,
    pub flags: CapabilityFlags,
    pub params: PlayerParams,
    pub endpoints: ServerEndpoints,
    pub locale: Locale,
}

impl PlayerEnvironment {
    /// Detect capabilities and resolve configuration for this host.
    ///
    /// Tweaks named in `params` are added to the ones already on `input`.
    /// Zero ad and live-seek limits in `params` take their defaults.
    #[instrument(skip_all)]
    pub fn load(input: EnvironmentInput, probe: &dyn HostProbe, params: PlayerParams) -> Result<Self> {
        let params = params.with_limit_defaults();
        let tweaks = input.tweaks.merge(params.tweaks());
        let input = input.with_tweaks(tweaks);

        let flags = detect(&input, probe);
        let endpoints = ServerEndpoints::resolve(&params, flags.is_ssl)?;
        let guid = PlayerGuid::new();

        info!(
            guid = %guid,
            device = %flags.device,
            ui_paradigm = %flags.ui_paradigm,
            video_types = ?flags.supported_video_types,
            "Player environment loaded"
        );

        Ok(Self {
            guid,
            input,
            flags,
            params,
            endpoints,
            locale: Locale::new(),
        })
    }

    /// Force the player locale
    pub fn set_locale(&mut self, locale: &str) {
        self.locale.set(locale);
    }

    /// Two-letter upper-case language code for UI strings
    pub fn locale(&self) -> String {
        self.locale.resolve(
            self.input.document_language.as_deref(),
            self.input.navigator_language.as_deref(),
        )
    }

    /// Whether the environment needs the named player module
    pub fn required_in_environment(&self, feature: &str) -> bool {
        self.flags.required_in_environment(feature)
    }
}

/// Process-wide memo of the first successfully loaded environment
#[derive(Debug, Default)]
pub struct EnvironmentCache {
    cell: OnceCell<PlayerEnvironment>,
}

impl EnvironmentCache {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Cached environment, loading it on first use.
    ///
    /// A failed load is returned to the caller and not cached.
    pub fn get_or_load<F>(&self, load: F) -> Result<&PlayerEnvironment>
    where
        F: FnOnce() -> Result<PlayerEnvironment>,
    {
        self.cell.get_or_try_init(load)
    }

    pub fn get(&self) -> Option<&PlayerEnvironment> {
        self.cell.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{StaticProbe, VideoType, MIME_MP4};

    fn android_tablet() -> EnvironmentInput {
        EnvironmentInput::new("", "Linux armv7l", "5.0 (Linux; Android 4.4.2; Nexus 7)")
    }

    #[test]
    fn test_params_tweaks_reach_detection() {
        let params = PlayerParams {
            tweaks: "android-enable-hls".into(),
            ..Default::default()
        };
        let env = PlayerEnvironment::load(android_tablet(), &StaticProbe::default(), params).unwrap();

        assert!(env.input.tweaks.android_enable_hls);
        assert!(env.flags.supports_video_type(VideoType::M3u8));
        assert_eq!(env.flags.decisions.ui_paradigm, "android-hls");
    }

    #[test]
    fn test_zero_limits_take_defaults() {
        let params = PlayerParams {
            max_ads_timeout: 0,
            min_live_seek_window: 30,
            ..Default::default()
        };
        let env = PlayerEnvironment::load(android_tablet(), &StaticProbe::default(), params).unwrap();
        assert_eq!(env.params.max_ads_timeout, 5);
        assert_eq!(env.params.min_live_seek_window, 30);
    }

    #[test]
    fn test_endpoints_follow_protocol() {
        let input = android_tablet().with_secure_protocol(true);
        let env = PlayerEnvironment::load(input, &StaticProbe::default(), PlayerParams::default()).unwrap();
        assert_eq!(env.endpoints.api.scheme(), "https");
    }

    #[test]
    fn test_invalid_endpoint_fails_load() {
        let params = PlayerParams {
            api_server: Some("::".into()),
            ..Default::default()
        };
        assert!(PlayerEnvironment::load(android_tablet(), &StaticProbe::default(), params).is_err());
    }

    #[test]
    fn test_locale() {
        let mut input = android_tablet();
        input.navigator_language = Some("pt-BR".into());
        let mut env = PlayerEnvironment::load(input, &StaticProbe::default(), PlayerParams::default()).unwrap();
        assert_eq!(env.locale(), "PT");

        env.set_locale("de");
        assert_eq!(env.locale(), "DE");
    }

    #[test]
    fn test_cache_loads_once() {
        let cache = EnvironmentCache::new();
        assert!(cache.get().is_none());

        let probe = StaticProbe::playing([MIME_MP4]);
        let first = cache
            .get_or_load(|| PlayerEnvironment::load(android_tablet(), &probe, PlayerParams::default()))
            .unwrap()
            .guid;
        let second = cache
            .get_or_load(|| panic!("environment loaded twice"))
            .unwrap()
            .guid;

        assert_eq!(first, second);
    }

    #[test]
    fn test_cache_does_not_keep_failures() {
        let cache = EnvironmentCache::new();
        let failed = cache.get_or_load(|| {
            let params = PlayerParams {
                hastur_server: Some("nope".into()),
                ..Default::default()
            };
            PlayerEnvironment::load(android_tablet(), &StaticProbe::default(), params)
        });
        assert!(failed.is_err());
        assert!(cache.get().is_none());
    }
}
