//! Device and UI paradigm classification

use super::rules::{first_match, Rule};
use super::sniff::Facts;
use serde::{Deserialize, Serialize};

/// Scaled window width at or below which a portrait Android 2 screen is a phone
const ANDROID2_PORTRAIT_MAX_WIDTH: f64 = 480.0;
/// Scaled window width at or below which a landscape Android 2 screen is a phone
const ANDROID2_LANDSCAPE_MAX_WIDTH: f64 = 560.0;

/// Device class used to pick stream renditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Device {
    #[serde(rename = "html5")]
    Html5,
    #[serde(rename = "iphone-html5")]
    IphoneHtml5,
    #[serde(rename = "ipad-html5")]
    IpadHtml5,
    #[serde(rename = "android-html5")]
    AndroidHtml5,
    #[serde(rename = "rim-html5")]
    RimHtml5,
    #[serde(rename = "winphone-html5")]
    WinphoneHtml5,
    #[serde(rename = "smarttv-html5")]
    SmarttvHtml5,
}

impl Device {
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Html5 => "html5",
            Device::IphoneHtml5 => "iphone-html5",
            Device::IpadHtml5 => "ipad-html5",
            Device::AndroidHtml5 => "android-html5",
            Device::RimHtml5 => "rim-html5",
            Device::WinphoneHtml5 => "winphone-html5",
            Device::SmarttvHtml5 => "smarttv-html5",
        }
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which UI chrome the player renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UiParadigm {
    /// Full controls
    Desktop,
    /// Touch controls sized for large screens
    Tablet,
    /// Minimal chrome, fullscreen playback only
    Mobile,
    /// The platform's own video player
    MobileNative,
}

impl UiParadigm {
    pub fn as_str(&self) -> &'static str {
        match self {
            UiParadigm::Desktop => "desktop",
            UiParadigm::Tablet => "tablet",
            UiParadigm::Mobile => "mobile",
            UiParadigm::MobileNative => "mobile-native",
        }
    }
}

impl std::fmt::Display for UiParadigm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static DEVICE_RULES: &[Rule<Device>] = &[
    Rule {
        name: "iphone",
        applies: |f| f.platform.is_iphone,
        outcome: Device::IphoneHtml5,
    },
    Rule {
        name: "ipad",
        applies: |f| f.platform.is_ipad,
        outcome: Device::IpadHtml5,
    },
    Rule {
        name: "android",
        applies: |f| f.platform.is_android,
        outcome: Device::AndroidHtml5,
    },
    Rule {
        name: "rim",
        applies: |f| f.platform.is_rim_device,
        outcome: Device::RimHtml5,
    },
    Rule {
        name: "winphone",
        applies: |f| f.platform.is_win_phone,
        outcome: Device::WinphoneHtml5,
    },
    Rule {
        name: "smarttv",
        applies: |f| f.platform.is_smart_tv,
        outcome: Device::SmarttvHtml5,
    },
];

/// Classify the device; the second value names the rule that fired
pub(crate) fn device(facts: &Facts<'_>) -> (&'static str, Device) {
    first_match(DEVICE_RULES, facts)
        .map(|rule| (rule.name, rule.outcome))
        .unwrap_or(("default", Device::Html5))
}

#[derive(Debug, Clone, Copy)]
enum ParadigmOutcome {
    Fixed(UiParadigm),
    /// Android 2 only reports a reliable outer width
    ScreenSize,
}

static PARADIGM_RULES: &[Rule<ParadigmOutcome>] = &[
    Rule {
        name: "android-hls",
        applies: |f| f.platform.is_android4_plus && f.input.tweaks.android_enable_hls,
        outcome: ParadigmOutcome::Fixed(UiParadigm::Tablet),
    },
    Rule {
        name: "iphone",
        applies: |f| f.platform.is_iphone,
        outcome: ParadigmOutcome::Fixed(UiParadigm::MobileNative),
    },
    Rule {
        name: "blackberry",
        applies: |f| f.is_blackberry(),
        outcome: ParadigmOutcome::Fixed(UiParadigm::MobileNative),
    },
    Rule {
        name: "ipad",
        applies: |f| f.is_ipad_os(),
        outcome: ParadigmOutcome::Fixed(UiParadigm::Tablet),
    },
    Rule {
        name: "kindle-hd",
        applies: |f| f.platform.is_kindle_hd,
        outcome: ParadigmOutcome::Fixed(UiParadigm::MobileNative),
    },
    Rule {
        name: "kindle",
        applies: |f| f.is_silk(),
        outcome: ParadigmOutcome::Fixed(UiParadigm::Mobile),
    },
    Rule {
        name: "android2",
        applies: |f| f.android2,
        outcome: ParadigmOutcome::ScreenSize,
    },
    Rule {
        name: "android",
        applies: |f| f.platform.is_android,
        outcome: ParadigmOutcome::Fixed(UiParadigm::Tablet),
    },
    Rule {
        name: "winphone",
        applies: |f| f.platform.is_win_phone,
        outcome: ParadigmOutcome::Fixed(UiParadigm::Mobile),
    },
    Rule {
        name: "desktop",
        applies: |f| f.is_desktop_platform(),
        outcome: ParadigmOutcome::Fixed(UiParadigm::Desktop),
    },
];

/// Pick the UI paradigm; anything unrecognized gets tablet chrome
pub(crate) fn ui_paradigm(facts: &Facts<'_>) -> (&'static str, UiParadigm) {
    match first_match(PARADIGM_RULES, facts) {
        Some(rule) => {
            let paradigm = match rule.outcome {
                ParadigmOutcome::Fixed(paradigm) => paradigm,
                ParadigmOutcome::ScreenSize => android2_paradigm(facts),
            };
            (rule.name, paradigm)
        }
        None => ("default", UiParadigm::Tablet),
    }
}

fn android2_paradigm(facts: &Facts<'_>) -> UiParadigm {
    let Some(width) = facts.input.scaled_width() else {
        return UiParadigm::Tablet;
    };
    let portrait = facts
        .input
        .orientation_degrees
        .is_some_and(|degrees| degrees % 180 == 0);

    if portrait && width <= ANDROID2_PORTRAIT_MAX_WIDTH {
        UiParadigm::Mobile
    } else if width <= ANDROID2_LANDSCAPE_MAX_WIDTH {
        UiParadigm::Mobile
    } else {
        UiParadigm::Tablet
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::EnvironmentInput;
    use crate::params::Tweaks;

    fn classify(input: &EnvironmentInput) -> (Device, UiParadigm) {
        let facts = Facts::gather(input);
        (device(&facts).1, ui_paradigm(&facts).1)
    }

    #[test]
    fn test_ipad() {
        let input = EnvironmentInput::new("", "iPad", "");
        assert_eq!(classify(&input), (Device::IpadHtml5, UiParadigm::Tablet));
    }

    #[test]
    fn test_iphone() {
        let input = EnvironmentInput::new("", "iPhone", "5.0 (iPhone; CPU iPhone OS 10_3 like Mac OS X)");
        assert_eq!(classify(&input), (Device::IphoneHtml5, UiParadigm::MobileNative));
    }

    #[test]
    fn test_blackberry() {
        let input = EnvironmentInput::new("", "BlackBerry", "5.0 (BlackBerry; U; BlackBerry 9900)");
        assert_eq!(classify(&input), (Device::RimHtml5, UiParadigm::MobileNative));
    }

    #[test]
    fn test_kindle_fire() {
        let hd = EnvironmentInput::new("", "Linux armv7l", "5.0 (Linux; U; en-us; KFTT) Silk/2.1 like Chrome");
        assert_eq!(classify(&hd).1, UiParadigm::MobileNative);

        let fire = EnvironmentInput::new("", "Linux armv7l", "5.0 (Linux; U; en-us; Kindle Fire) Silk/1.0 like Chrome");
        assert_eq!(classify(&fire).1, UiParadigm::Mobile);
    }

    #[test]
    fn test_android_tablet_and_hls_tweak() {
        let mut input = EnvironmentInput::new("", "Linux armv7l", "5.0 (Linux; Android 4.4.2; Nexus 7)");
        assert_eq!(classify(&input), (Device::AndroidHtml5, UiParadigm::Tablet));

        input.tweaks = Tweaks {
            android_enable_hls: true,
            ..Default::default()
        };
        let facts = Facts::gather(&input);
        assert_eq!(ui_paradigm(&facts), ("android-hls", UiParadigm::Tablet));
    }

    #[test]
    fn test_android2_screen_heuristic() {
        let phone = EnvironmentInput::new("", "Linux armv7l", "4.0 (Linux; U; Android 2.3.6)")
            .with_window(960, 1600)
            .with_pixel_ratio(2.0)
            .with_orientation(Some(0));
        assert_eq!(classify(&phone).1, UiParadigm::Mobile);

        let landscape = phone.clone().with_window(1100, 600).with_orientation(Some(90));
        assert_eq!(classify(&landscape).1, UiParadigm::Mobile);

        let tablet = phone.clone().with_window(1280, 800).with_orientation(Some(90));
        assert_eq!(classify(&tablet).1, UiParadigm::Tablet);

        let bad_ratio = phone.with_pixel_ratio(0.0);
        assert_eq!(classify(&bad_ratio).1, UiParadigm::Tablet);
    }

    #[test]
    fn test_windows_phone() {
        let input = EnvironmentInput::new("", "Win32", "5.0 (compatible; MSIE 10.0; Windows Phone 8.0)");
        assert_eq!(classify(&input), (Device::WinphoneHtml5, UiParadigm::Mobile));
    }

    #[test]
    fn test_desktops() {
        for platform in ["MacIntel", "Win32", "Linux x86_64"] {
            let input = EnvironmentInput::new("", platform, "5.0");
            assert_eq!(classify(&input), (Device::Html5, UiParadigm::Desktop));
        }
    }

    #[test]
    fn test_unknown_defaults_to_tablet() {
        let input = EnvironmentInput::new("Mozilla/5.0 (PlayStation 4)", "PlayStation 4", "5.0");
        let facts = Facts::gather(&input);
        assert_eq!(ui_paradigm(&facts), ("default", UiParadigm::Tablet));
        assert_eq!(device(&facts), ("default", Device::Html5));
    }

    #[test]
    fn test_smart_tv_device() {
        let input = EnvironmentInput::new("Mozilla/5.0 (SMART-TV; Linux; Tizen 2.3) SmartTV", "Linux", "5.0");
        assert_eq!(classify(&input).0, Device::SmarttvHtml5);
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&UiParadigm::MobileNative).unwrap(), "\"mobile-native\"");
        assert_eq!(serde_json::to_string(&Device::IpadHtml5).unwrap(), "\"ipad-html5\"");
    }
}
