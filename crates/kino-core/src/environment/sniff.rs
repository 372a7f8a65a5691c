//! User-agent, platform and app-version sniffing
//!
//! Every flag here is a plain pattern test over one input string. The only
//! cross-flag dependencies are `is_mac_os` (excludes iOS) and
//! `is_android4_plus` (requires Android).

use super::EnvironmentInput;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// navigator.platform
static PLATFORM_WINDOWS: Lazy<Regex> = Lazy::new(|| Regex::new(r"Win").unwrap());
static PLATFORM_IOS: Lazy<Regex> = Lazy::new(|| Regex::new(r"iPhone|iPad|iPod").unwrap());
static PLATFORM_IPHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"iPhone|iPod").unwrap());
static PLATFORM_IPAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"iPad").unwrap());
static PLATFORM_DESKTOP: Lazy<Regex> = Lazy::new(|| Regex::new(r"Mac|Win|Linux").unwrap());

// navigator.appVersion
static OS_ANDROID: Lazy<Regex> = Lazy::new(|| Regex::new(r"Android").unwrap());
static OS_ANDROID_2: Lazy<Regex> = Lazy::new(|| Regex::new(r"Android 2").unwrap());
static OS_ANDROID_2_OR_3: Lazy<Regex> = Lazy::new(|| Regex::new(r"Android [23]").unwrap());
static OS_RIM: Lazy<Regex> = Lazy::new(|| Regex::new(r"BlackBerry|PlayBook").unwrap());
static OS_BLACKBERRY: Lazy<Regex> = Lazy::new(|| Regex::new(r"BlackBerry").unwrap());
static OS_WIN_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Windows Phone|ZuneWP|XBLWP").unwrap());
static OS_MAC: Lazy<Regex> = Lazy::new(|| Regex::new(r"Mac").unwrap());
static OS_MAC_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"Mac OS X ([0-9]+)_([0-9]+)").unwrap());
static OS_IPAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"iPad").unwrap());
static OS_KINDLE_HD: Lazy<Regex> = Lazy::new(|| Regex::new(r"Silk/2").unwrap());
static OS_SILK: Lazy<Regex> = Lazy::new(|| Regex::new(r"Silk").unwrap());

// navigator.userAgent
static UA_SMART_TV: Lazy<Regex> = Lazy::new(|| Regex::new(r"SmartTV|NetCast").unwrap());
static UA_SONY_CE: Lazy<Regex> = Lazy::new(|| Regex::new(r"SonyCEBrowser").unwrap());
static UA_FIREFOX: Lazy<Regex> = Lazy::new(|| Regex::new(r"Firefox").unwrap());
static UA_CHROME: Lazy<Regex> = Lazy::new(|| Regex::new(r"Chrome").unwrap());
static UA_WEBKIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"AppleWebKit").unwrap());
static UA_IE: Lazy<Regex> = Lazy::new(|| Regex::new(r"MSIE|Trident").unwrap());
static UA_TRIDENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"Trident").unwrap());
static UA_IE_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"rv:([0-9]+)").unwrap());
static UA_CHROME_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"Chrome.([0-9]+)").unwrap());
static UA_IOS_DEVICE: Lazy<Regex> = Lazy::new(|| Regex::new(r"iPad|iPhone|iPod").unwrap());
static UA_IOS_VERSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"OS ([0-9]+)").unwrap());

/// Operating system and device family flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformFlags {
    pub is_windows: bool,
    pub is_mac_os: bool,
    pub is_mac_os_lion_or_later: bool,
    pub is_ios: bool,
    pub is_iphone: bool,
    pub is_ipad: bool,
    pub is_android: bool,
    pub is_android4_plus: bool,
    pub is_rim_device: bool,
    pub is_win_phone: bool,
    pub is_smart_tv: bool,
    pub is_kindle_hd: bool,
    /// Major iOS version, only for iOS user agents
    pub ios_major_version: Option<u32>,
}

impl PlatformFlags {
    pub fn detect(input: &EnvironmentInput) -> Self {
        let platform = input.platform.as_str();
        let os = input.app_version.as_str();
        let ua = input.user_agent.as_str();

        let is_ios = PLATFORM_IOS.is_match(platform);
        let is_android = OS_ANDROID.is_match(os);

        Self {
            is_windows: PLATFORM_WINDOWS.is_match(platform),
            is_mac_os: !is_ios && OS_MAC.is_match(os),
            is_mac_os_lion_or_later: mac_os_version(os).is_some_and(|v| v >= (10, 7)),
            is_ios,
            is_iphone: PLATFORM_IPHONE.is_match(platform),
            is_ipad: PLATFORM_IPAD.is_match(platform),
            is_android,
            is_android4_plus: is_android && !OS_ANDROID_2_OR_3.is_match(os),
            is_rim_device: OS_RIM.is_match(os),
            is_win_phone: OS_WIN_PHONE.is_match(os),
            is_smart_tv: UA_SMART_TV.is_match(ua),
            is_kindle_hd: OS_KINDLE_HD.is_match(os),
            ios_major_version: ios_major_version(ua),
        }
    }
}

/// Browser family flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserFlags {
    pub is_firefox: bool,
    pub is_chrome: bool,
    /// WebKit without the Chrome token
    pub is_safari: bool,
    pub is_ie: bool,
    pub is_ie11_plus: bool,
    pub chrome_major_version: Option<u32>,
}

impl BrowserFlags {
    pub fn detect(input: &EnvironmentInput) -> Self {
        let ua = input.user_agent.as_str();
        let is_chrome = UA_CHROME.is_match(ua);

        Self {
            is_firefox: UA_FIREFOX.is_match(ua),
            is_chrome,
            is_safari: UA_WEBKIT.is_match(ua) && !is_chrome,
            is_ie: UA_IE.is_match(ua),
            is_ie11_plus: UA_TRIDENT.is_match(ua)
                && capture_u32(&UA_IE_VERSION, ua).is_some_and(|v| v >= 11),
            chrome_major_version: capture_u32(&UA_CHROME_VERSION, ua),
        }
    }
}

/// Everything the rule tables look at
pub(crate) struct Facts<'a> {
    pub input: &'a EnvironmentInput,
    pub platform: PlatformFlags,
    pub browser: BrowserFlags,
    /// Android 2.x or 3.x
    pub legacy_android: bool,
    pub android2: bool,
}

impl<'a> Facts<'a> {
    pub fn gather(input: &'a EnvironmentInput) -> Self {
        Self {
            input,
            platform: PlatformFlags::detect(input),
            browser: BrowserFlags::detect(input),
            legacy_android: OS_ANDROID_2_OR_3.is_match(&input.app_version),
            android2: OS_ANDROID_2.is_match(&input.app_version),
        }
    }

    pub fn is_blackberry(&self) -> bool {
        OS_BLACKBERRY.is_match(&self.input.app_version)
    }

    pub fn is_silk(&self) -> bool {
        OS_SILK.is_match(&self.input.app_version)
    }

    pub fn is_ipad_os(&self) -> bool {
        self.platform.is_ipad || OS_IPAD.is_match(&self.input.app_version)
    }

    pub fn is_sony_ce_browser(&self) -> bool {
        UA_SONY_CE.is_match(&self.input.user_agent)
    }

    pub fn is_desktop_platform(&self) -> bool {
        PLATFORM_DESKTOP.is_match(&self.input.platform)
    }
}

fn capture_u32(pattern: &Regex, haystack: &str) -> Option<u32> {
    pattern.captures(haystack)?.get(1)?.as_str().parse().ok()
}

fn ios_major_version(ua: &str) -> Option<u32> {
    if !UA_IOS_DEVICE.is_match(ua) {
        return None;
    }
    capture_u32(&UA_IOS_VERSION, ua)
}

fn mac_os_version(os: &str) -> Option<(u32, u32)> {
    let caps = OS_MAC_VERSION.captures(os)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    Some((major, minor))
}
