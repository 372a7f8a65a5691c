//! Playable video formats and profiles

use super::probe::{answer_or, HostProbe, MIME_HLS, MIME_MP4, MIME_WEBM};
use super::rules::{first_match, Rule};
use super::sniff::Facts;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Container / manifest formats the player can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoType {
    Mp4,
    M3u8,
    Webm,
}

impl VideoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoType::Mp4 => "mp4",
            VideoType::M3u8 => "m3u8",
            VideoType::Webm => "webm",
        }
    }
}

impl std::fmt::Display for VideoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// H.264 profile restriction for MP4 renditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoProfile {
    Baseline,
}

static VIDEO_TYPE_RULES: &[Rule<&[VideoType]>] = &[
    Rule {
        name: "force-mp4",
        applies: |f| f.input.tweaks.html5_force_mp4,
        outcome: &[VideoType::Mp4],
    },
    // Windows Phone user agents claim to be "like iPhone"
    Rule {
        name: "winphone",
        applies: |f| f.platform.is_win_phone,
        outcome: &[VideoType::Mp4],
    },
    // Sony's Opera TV browser plays HLS but does not report it
    Rule {
        name: "sony-tv",
        applies: |f| f.is_sony_ce_browser(),
        outcome: &[VideoType::M3u8],
    },
    Rule {
        name: "android-hls",
        applies: |f| f.platform.is_android4_plus && f.input.tweaks.android_enable_hls,
        outcome: &[VideoType::M3u8, VideoType::Mp4],
    },
    Rule {
        name: "android",
        applies: |f| f.platform.is_android,
        outcome: &[VideoType::Mp4],
    },
    // 2012 Samsung and LG sets mis-play HLS
    Rule {
        name: "smarttv",
        applies: |f| f.platform.is_smart_tv,
        outcome: &[VideoType::Mp4],
    },
];

/// Formats this environment can play; the first value names the rule that fired
pub(crate) fn supported_video_types(
    facts: &Facts<'_>,
    probe: &dyn HostProbe,
) -> (&'static str, BTreeSet<VideoType>) {
    match first_match(VIDEO_TYPE_RULES, facts) {
        Some(rule) => (rule.name, rule.outcome.iter().copied().collect()),
        None => ("probe", probe_video_types(facts, probe)),
    }
}

fn probe_video_types(facts: &Facts<'_>, probe: &dyn HostProbe) -> BTreeSet<VideoType> {
    let mut types = BTreeSet::new();
    if !answer_or("supports_video_element", probe.supports_video_element(), false) {
        return types;
    }

    let plays = |mime: &str| answer_or("can_play_type", probe.can_play_type(mime), false);

    let platform = &facts.platform;
    let hls_allowed = !platform.is_rim_device && (!platform.is_mac_os || platform.is_mac_os_lion_or_later);
    if hls_allowed && MIME_HLS.iter().any(|mime| plays(*mime)) {
        types.insert(VideoType::M3u8);
    }
    if plays(MIME_MP4) {
        types.insert(VideoType::Mp4);
    }
    if plays(MIME_WEBM) {
        types.insert(VideoType::Webm);
    }
    types
}

/// Mobile platforms only decode the baseline profile
pub(crate) fn supported_video_profile(facts: &Facts<'_>) -> Option<VideoProfile> {
    if facts.platform.is_ios || facts.platform.is_android {
        Some(VideoProfile::Baseline)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::probe::{NullProbe, StaticProbe};
    use crate::environment::EnvironmentInput;
    use crate::params::Tweaks;

    fn all_formats() -> StaticProbe {
        StaticProbe::playing([MIME_HLS[0], MIME_MP4, MIME_WEBM])
    }

    fn types(input: &EnvironmentInput, probe: &dyn HostProbe) -> Vec<VideoType> {
        let facts = Facts::gather(input);
        supported_video_types(&facts, probe).1.into_iter().collect()
    }

    #[test]
    fn test_force_mp4_ignores_probe() {
        let mut input = EnvironmentInput::new("", "MacIntel", "5.0 (Macintosh; Intel Mac OS X 10_12_4)");
        input.tweaks = Tweaks {
            html5_force_mp4: true,
            ..Default::default()
        };
        assert_eq!(types(&input, &all_formats()), vec![VideoType::Mp4]);
    }

    #[test]
    fn test_android_hls_requires_tweak() {
        let mut input = EnvironmentInput::new("", "Linux armv7l", "5.0 (Linux; Android 4.4.2; Nexus 7)");
        assert_eq!(types(&input, &all_formats()), vec![VideoType::Mp4]);

        input.tweaks.android_enable_hls = true;
        assert_eq!(types(&input, &all_formats()), vec![VideoType::Mp4, VideoType::M3u8]);

        let legacy = EnvironmentInput {
            app_version: "4.0 (Linux; U; Android 3.2)".into(),
            ..input
        };
        assert_eq!(types(&legacy, &all_formats()), vec![VideoType::Mp4]);
    }

    #[test]
    fn test_sony_tv_forces_hls() {
        let input = EnvironmentInput::new("Mozilla/5.0 (Linux; U) SonyCEBrowser/1.0", "Linux", "5.0");
        let facts = Facts::gather(&input);
        let (rule, found) = supported_video_types(&facts, &StaticProbe::default());
        assert_eq!(rule, "sony-tv");
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![VideoType::M3u8]);
    }

    #[test]
    fn test_winphone_is_mp4_only() {
        let wp8 = "5.0 (compatible; MSIE 10.0; Windows Phone 8.0; Trident/6.0; IEMobile/10.0; ARM; Touch)";
        let wp81 = "5.0 (Mobile; Windows Phone 8.1; Android 4.0; ARM; Trident/7.0; Touch; rv:11.0; \
                    IEMobile/11.0; NOKIA; Lumia 635) like iPhone OS 7_0_3 Mac OS X AppleWebKit/537 (KHTML, like Gecko) Mobile Safari/537";

        for app_version in [wp8, wp81] {
            let mut input = EnvironmentInput::new("", "Win32", app_version);
            input.tweaks.android_enable_hls = true;
            let facts = Facts::gather(&input);
            let (rule, found) = supported_video_types(&facts, &all_formats());
            assert_eq!(rule, "winphone", "{}", app_version);
            assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![VideoType::Mp4]);
        }
    }

    #[test]
    fn test_smart_tv_is_mp4_only() {
        let input = EnvironmentInput::new(
            "Mozilla/5.0 (SmartHub; SMART-TV; U; Linux/SmartTV) AppleWebKit/531.2+ (KHTML, like Gecko) WebBrowser/1.0 SmartTV Safari/531.2+",
            "Linux",
            "5.0 (SmartHub; SMART-TV; U; Linux/SmartTV)",
        );
        let facts = Facts::gather(&input);
        let (rule, found) = supported_video_types(&facts, &all_formats());
        assert_eq!(rule, "smarttv");
        assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![VideoType::Mp4]);
    }

    #[test]
    fn test_panicking_codec_callback_is_unsupported() {
        let input = EnvironmentInput::new("", "Win32", "5.0 (Windows NT 10.0)");
        let probe = crate::environment::probe::CodecProbe(|_: &str| -> bool { panic!("canPlayType threw") });
        assert!(types(&input, &probe).is_empty());
    }

    #[test]
    fn test_probe_desktop() {
        let input = EnvironmentInput::new("", "Win32", "5.0 (Windows NT 10.0)");
        assert_eq!(
            types(&input, &all_formats()),
            vec![VideoType::Mp4, VideoType::M3u8, VideoType::Webm]
        );
    }

    #[test]
    fn test_old_mac_never_hls() {
        let input = EnvironmentInput::new("", "MacIntel", "5.0 (Macintosh; Intel Mac OS X 10_6_8)");
        assert_eq!(types(&input, &all_formats()), vec![VideoType::Mp4, VideoType::Webm]);
    }

    #[test]
    fn test_rim_never_hls() {
        let input = EnvironmentInput::new("", "BlackBerry", "5.0 (PlayBook; U; RIM Tablet OS 2.1.0)");
        assert_eq!(types(&input, &all_formats()), vec![VideoType::Mp4, VideoType::Webm]);
    }

    #[test]
    fn test_no_video_element() {
        let input = EnvironmentInput::new("", "Win32", "5.0");
        assert!(types(&input, &StaticProbe::without_video()).is_empty());
    }

    #[test]
    fn test_failed_probe_is_unsupported() {
        let input = EnvironmentInput::new("", "Win32", "5.0");
        assert!(types(&input, &NullProbe).is_empty());
    }

    #[test]
    fn test_profile() {
        let ios = EnvironmentInput::new("", "iPhone", "");
        assert_eq!(supported_video_profile(&Facts::gather(&ios)), Some(VideoProfile::Baseline));

        let desktop = EnvironmentInput::new("", "Win32", "");
        assert_eq!(supported_video_profile(&Facts::gather(&desktop)), None);
    }
}
