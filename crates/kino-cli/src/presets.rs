//! Built-in browser environments for quick inspection

use kino_core::{EnvironmentInput, StaticProbe, MIME_HLS, MIME_MP4, MIME_WEBM};

/// A named, reproducible browser environment
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub user_agent: &'static str,
    pub platform: &'static str,
    pub window: (u32, u32),
    pub pixel_ratio: f64,
    pub orientation: Option<i32>,
    pub playable: &'static [&'static str],
    pub touch: bool,
}

impl Preset {
    pub fn input(&self) -> EnvironmentInput {
        EnvironmentInput::from_user_agent(self.user_agent, self.platform)
            .with_window(self.window.0, self.window.1)
            .with_pixel_ratio(self.pixel_ratio)
            .with_orientation(self.orientation)
    }

    pub fn probe(&self) -> StaticProbe {
        StaticProbe::playing(self.playable.iter().copied()).with_touch(self.touch)
    }
}

const DESKTOP_TYPES: &[&str] = &[MIME_MP4, MIME_WEBM];
const APPLE_TYPES: &[&str] = &[MIME_HLS[0], MIME_MP4];
const EVERYTHING: &[&str] = &[MIME_HLS[0], MIME_HLS[1], MIME_MP4, MIME_WEBM];

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "chrome-mac",
        description: "Chrome 58 on macOS Sierra",
        user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_4) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36",
        platform: "MacIntel",
        window: (1440, 900),
        pixel_ratio: 2.0,
        orientation: None,
        playable: DESKTOP_TYPES,
        touch: false,
    },
    Preset {
        name: "safari-mac",
        description: "Safari 11 on macOS High Sierra",
        user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13_1) AppleWebKit/604.3.5 (KHTML, like Gecko) Version/11.0.1 Safari/604.1.38",
        platform: "MacIntel",
        window: (1440, 900),
        pixel_ratio: 2.0,
        orientation: None,
        playable: APPLE_TYPES,
        touch: false,
    },
    Preset {
        name: "safari-snow-leopard",
        description: "Safari 5 on Mac OS X 10.6",
        user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_6_8) AppleWebKit/534.59.10 (KHTML, like Gecko) Version/5.1.9 Safari/534.59.10",
        platform: "MacIntel",
        window: (1280, 800),
        pixel_ratio: 1.0,
        orientation: None,
        playable: APPLE_TYPES,
        touch: false,
    },
    Preset {
        name: "firefox-linux",
        description: "Firefox 54 on Ubuntu",
        user_agent: "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:54.0) Gecko/20100101 Firefox/54.0",
        platform: "Linux x86_64",
        window: (1920, 1080),
        pixel_ratio: 1.0,
        orientation: None,
        playable: DESKTOP_TYPES,
        touch: false,
    },
    Preset {
        name: "ie11",
        description: "Internet Explorer 11 on Windows 10",
        user_agent: "Mozilla/5.0 (Windows NT 10.0; WOW64; Trident/7.0; rv:11.0) like Gecko",
        platform: "Win32",
        window: (1366, 768),
        pixel_ratio: 1.0,
        orientation: None,
        playable: &[MIME_MP4],
        touch: false,
    },
    Preset {
        name: "iphone",
        description: "Safari on iPhone, iOS 10",
        user_agent: "Mozilla/5.0 (iPhone; CPU iPhone OS 10_3_1 like Mac OS X) AppleWebKit/603.1.30 (KHTML, like Gecko) Version/10.0 Mobile/14E304 Safari/602.1",
        platform: "iPhone",
        window: (375, 667),
        pixel_ratio: 2.0,
        orientation: Some(0),
        playable: APPLE_TYPES,
        touch: true,
    },
    Preset {
        name: "ipad",
        description: "Safari on iPad, iOS 11",
        user_agent: "Mozilla/5.0 (iPad; CPU OS 11_0 like Mac OS X) AppleWebKit/604.1.34 (KHTML, like Gecko) Version/11.0 Mobile/15A5341f Safari/604.1",
        platform: "iPad",
        window: (768, 1024),
        pixel_ratio: 2.0,
        orientation: Some(0),
        playable: APPLE_TYPES,
        touch: true,
    },
    Preset {
        name: "android-chrome",
        description: "Chrome 59 on Android 7 phone",
        user_agent: "Mozilla/5.0 (Linux; Android 7.0; SM-G930V Build/NRD90M) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/59.0.3071.125 Mobile Safari/537.36",
        platform: "Linux armv7l",
        window: (1080, 1920),
        pixel_ratio: 3.0,
        orientation: Some(0),
        playable: EVERYTHING,
        touch: true,
    },
    Preset {
        name: "android2",
        description: "Stock browser on Android 2.3 phone",
        user_agent: "Mozilla/5.0 (Linux; U; Android 2.3.6; en-us; Nexus S Build/GRK39F) AppleWebKit/533.1 (KHTML, like Gecko) Version/4.0 Mobile Safari/533.1",
        platform: "Linux armv7l",
        window: (480, 800),
        pixel_ratio: 1.5,
        orientation: Some(0),
        playable: &[MIME_MP4],
        touch: true,
    },
    Preset {
        name: "kindle-fire-hd",
        description: "Silk 2 on Kindle Fire HD",
        user_agent: "Mozilla/5.0 (Linux; U; en-us; KFTT Build/IML74K) AppleWebKit/535.19 (KHTML, like Gecko) Silk/2.1 Safari/535.19 Silk-Accelerated=true",
        platform: "Linux armv7l",
        window: (800, 1280),
        pixel_ratio: 1.5,
        orientation: Some(0),
        playable: &[MIME_MP4],
        touch: true,
    },
    Preset {
        name: "blackberry",
        description: "BlackBerry 7 browser",
        user_agent: "Mozilla/5.0 (BlackBerry; U; BlackBerry 9900; en) AppleWebKit/534.11+ (KHTML, like Gecko) Version/7.1.0.346 Mobile Safari/534.11+",
        platform: "BlackBerry",
        window: (640, 480),
        pixel_ratio: 1.0,
        orientation: Some(0),
        playable: EVERYTHING,
        touch: true,
    },
    Preset {
        name: "windows-phone",
        description: "IE Mobile 10 on Windows Phone 8",
        user_agent: "Mozilla/5.0 (compatible; MSIE 10.0; Windows Phone 8.0; Trident/6.0; IEMobile/10.0; ARM; Touch; NOKIA; Lumia 920)",
        platform: "Win32",
        window: (480, 800),
        pixel_ratio: 1.0,
        orientation: Some(0),
        playable: EVERYTHING,
        touch: true,
    },
    Preset {
        name: "samsung-tv",
        description: "Samsung 2012 Smart TV browser",
        user_agent: "Mozilla/5.0 (SmartHub; SMART-TV; U; Linux/SmartTV) AppleWebKit/531.2+ (KHTML, like Gecko) WebBrowser/1.0 SmartTV Safari/531.2+",
        platform: "Linux",
        window: (1280, 720),
        pixel_ratio: 1.0,
        orientation: None,
        playable: EVERYTHING,
        touch: false,
    },
    Preset {
        name: "sony-tv",
        description: "Sony Opera TV browser",
        user_agent: "Mozilla/5.0 (Linux; U) AppleWebKit/533.1 (KHTML, like Gecko) SonyCEBrowser/1.0 (BDP-S590; Sony)",
        platform: "Linux",
        window: (1280, 720),
        pixel_ratio: 1.0,
        orientation: None,
        playable: &[MIME_MP4],
        touch: false,
    },
];

/// Look up a preset by name
pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
