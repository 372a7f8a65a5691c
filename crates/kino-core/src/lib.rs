//! Kino Core - Browser Environment Library for Kino
//!
//! This crate provides what the player needs to know about its host before
//! playback starts:
//! - Capability detection from user agent, platform and DOM probes
//! - Supported video formats and profiles
//! - Device class and UI paradigm
//! - Publisher parameters and tweaks
//! - Backend endpoint resolution
//! - Locale resolution
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          Kino Core                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐           │
//! │  │ Environment  │  │  HostProbe   │  │    Player    │           │
//! │  │    Input     │  │  (wasm/cli)  │  │    Params    │           │
//! │  └──────┬───────┘  └──────┬───────┘  └──────┬───────┘           │
//! │         │                 │                 │                   │
//! │         └────────┬────────┘                 │                   │
//! │                  │                          │                   │
//! │           ┌──────┴──────┐            ┌──────┴──────┐            │
//! │           │   detect    │            │   Server    │            │
//! │           │ (rule table)│            │  Endpoints  │            │
//! │           └──────┬──────┘            └──────┬──────┘            │
//! │                  │                          │                   │
//! │                  └────────────┬─────────────┘                   │
//! │                        ┌──────┴──────┐                          │
//! │                        │   Player    │                          │
//! │                        │ Environment │                          │
//! │                        └─────────────┘                          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use kino_core::{detect, EnvironmentInput, StaticProbe, UiParadigm, MIME_MP4};
//!
//! let input = EnvironmentInput::from_user_agent(
//!     "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_4) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36",
//!     "MacIntel",
//! );
//! let flags = detect(&input, &StaticProbe::playing([MIME_MP4]));
//! assert_eq!(flags.ui_paradigm, UiParadigm::Desktop);
//! assert_eq!(flags.browser.chrome_major_version, Some(58));
//! ```

pub mod environment;
pub mod error;
pub mod locale;
pub mod params;
pub mod player;
pub mod server;

pub use environment::{
    detect, BrowserFlags, CapabilityFlags, CodecProbe, Decisions, Device, EnvironmentInput,
    Feature, HostProbe, NullProbe, PlatformFlags, StaticProbe, UiParadigm, VideoProfile,
    VideoType, MIME_HLS, MIME_MP4, MIME_WEBM,
};
pub use error::{Error, Result};
pub use locale::Locale;
pub use params::{PlayerParams, PublisherParameters, Tweaks};
pub use player::{EnvironmentCache, PlayerEnvironment, PlayerGuid};
pub use server::ServerEndpoints;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() {
    tracing::info!(version = VERSION, "Kino Core initialized");
}
