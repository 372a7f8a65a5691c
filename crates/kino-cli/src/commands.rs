//! CLI command implementations

use crate::output::{self, OutputFormat, Row};
use crate::presets::{self, PRESETS};
use anyhow::Context;
use clap::Args;
use console::style;
use kino_core::{
    CapabilityFlags, EnvironmentInput, PlayerEnvironment, PlayerParams, ServerEndpoints,
    StaticProbe, Tweaks,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Options for `detect`
#[derive(Args, Debug, Default)]
pub struct DetectArgs {
    /// Built-in environment to start from (see `presets`)
    #[arg(long, conflicts_with = "input")]
    pub preset: Option<String>,

    /// JSON file with `environment` and `probe` objects
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// navigator.userAgent
    #[arg(short, long)]
    pub user_agent: Option<String>,

    /// navigator.platform
    #[arg(short, long)]
    pub platform: Option<String>,

    /// navigator.appVersion (derived from the user agent when omitted)
    #[arg(long)]
    pub app_version: Option<String>,

    /// Outer window width
    #[arg(long)]
    pub width: Option<u32>,

    /// Outer window height
    #[arg(long)]
    pub height: Option<u32>,

    /// window.devicePixelRatio
    #[arg(long)]
    pub pixel_ratio: Option<f64>,

    /// window.orientation in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub orientation: Option<i32>,

    /// Page is served over https
    #[arg(long)]
    pub secure: bool,

    /// Comma-separated tweaks (android-enable-hls, html5-force-mp4)
    #[arg(short, long)]
    pub tweaks: Option<String>,

    /// MIME type the host can play (repeatable)
    #[arg(long = "play-type")]
    pub play_types: Vec<String>,

    /// Host exposes touch events
    #[arg(long)]
    pub touch: bool,
}

/// Environment file accepted by `detect --input`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EnvironmentFile {
    environment: EnvironmentInput,
    probe: StaticProbe,
}

/// Detect capabilities for a synthetic environment
pub fn detect(args: DetectArgs, format: &str) -> anyhow::Result<()> {
    let (input, probe) = build_environment(args)?;
    debug!(user_agent = %input.user_agent, platform = %input.platform, "Detecting");

    let flags = kino_core::detect(&input, &probe);

    match OutputFormat::from(format) {
        OutputFormat::Json => println!("{}", output::to_json(&flags)),
        OutputFormat::Table => {
            println!("{}", output::table(summary_rows(&flags)));
            println!("{}", output::table(flag_rows(&flags)));
        }
        OutputFormat::Text => {
            println!("{}", style("Environment").bold());
            println!("{}", output::lines(&summary_rows(&flags)));
            println!("\n{}", style("Flags").bold());
            println!("{}", output::lines(&flag_rows(&flags)));
        }
    }

    Ok(())
}

fn build_environment(args: DetectArgs) -> anyhow::Result<(EnvironmentInput, StaticProbe)> {
    let (mut input, mut probe) = if let Some(path) = &args.input {
        let file: EnvironmentFile = read_json(path)?;
        (file.environment, file.probe)
    } else if let Some(name) = &args.preset {
        let preset = presets::find(name)
            .with_context(|| format!("Unknown preset '{}', run `kino-cli presets`", name))?;
        (preset.input(), preset.probe())
    } else {
        (EnvironmentInput::default().with_window(1280, 720), StaticProbe::default())
    };

    if let Some(ua) = args.user_agent {
        let platform = args.platform.clone().unwrap_or_else(|| input.platform.clone());
        let derived = EnvironmentInput::from_user_agent(&ua, &platform);
        input.user_agent = derived.user_agent;
        input.app_version = derived.app_version;
    }
    if let Some(platform) = args.platform {
        input.platform = platform;
    }
    if let Some(app_version) = args.app_version {
        input.app_version = app_version;
    }
    if let Some(width) = args.width {
        input.window_width = width;
    }
    if let Some(height) = args.height {
        input.window_height = height;
    }
    if let Some(ratio) = args.pixel_ratio {
        input.device_pixel_ratio = ratio;
    }
    if args.orientation.is_some() {
        input.orientation_degrees = args.orientation;
    }
    if args.secure {
        input.secure_protocol = true;
    }
    if let Some(tweaks) = args.tweaks {
        input.tweaks = input.tweaks.merge(Tweaks::parse(&tweaks));
    }
    if !args.play_types.is_empty() {
        probe.playable = args.play_types;
    }
    if args.touch {
        probe.touch = true;
    }

    Ok((input, probe))
}

fn summary_rows(flags: &CapabilityFlags) -> Vec<Row> {
    let video_types = flags
        .supported_video_types
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let features = flags
        .required_features
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let version = |v: Option<u32>| v.map(|v| v.to_string()).unwrap_or_else(|| "-".into());

    vec![
        Row::new("device", format!("{} ({})", flags.device, flags.decisions.device)),
        Row::new(
            "ui_paradigm",
            format!("{} ({})", flags.ui_paradigm, flags.decisions.ui_paradigm),
        ),
        Row::new(
            "video_types",
            format!("{{{}}} ({})", video_types, flags.decisions.video_types),
        ),
        Row::new(
            "video_profile",
            flags
                .supported_video_profile
                .map(|_| "baseline")
                .unwrap_or("-"),
        ),
        Row::new("chrome_version", version(flags.browser.chrome_major_version)),
        Row::new("ios_version", version(flags.platform.ios_major_version)),
        Row::new("required_features", features),
        Row::new("document_domain", &flags.document_domain),
    ]
}

fn flag_rows(flags: &CapabilityFlags) -> Vec<Row> {
    flags
        .flags()
        .into_iter()
        .map(|(name, value)| Row::new(name, value))
        .collect()
}

/// List the built-in presets
pub fn list_presets(format: &str) -> anyhow::Result<()> {
    match OutputFormat::from(format) {
        OutputFormat::Json => {
            let names: Vec<_> = PRESETS
                .iter()
                .map(|p| serde_json::json!({ "name": p.name, "description": p.description }))
                .collect();
            println!("{}", output::to_json(&names));
        }
        OutputFormat::Table => {
            let rows = PRESETS.iter().map(|p| Row::new(p.name, p.description)).collect();
            println!("{}", output::table(rows));
        }
        OutputFormat::Text => {
            println!("{}", style("Presets").bold());
            let rows: Vec<_> = PRESETS.iter().map(|p| Row::new(p.name, p.description)).collect();
            println!("{}", output::lines(&rows));
        }
    }
    Ok(())
}

/// Resolve backend endpoints
pub fn endpoints(params_path: Option<PathBuf>, secure: bool, format: &str) -> anyhow::Result<()> {
    let params = load_params(params_path.as_deref())?;
    let resolved = ServerEndpoints::resolve(&params, secure)?;

    let rows = vec![
        Row::new("api", &resolved.api),
        Row::new("auth", &resolved.auth),
        Row::new("analytics", &resolved.analytics),
        Row::new("hastur", &resolved.hastur),
    ];

    match OutputFormat::from(format) {
        OutputFormat::Json => println!("{}", output::to_json(&resolved)),
        OutputFormat::Table => println!("{}", output::table(rows)),
        OutputFormat::Text => {
            println!(
                "{} ({}, {})",
                style("Endpoints").bold(),
                if secure { "https" } else { "http" },
                if params.is_prod() { "production" } else { "staging" }
            );
            println!("{}", output::lines(&rows));
        }
    }

    Ok(())
}

/// Load a full player environment from a preset and params file
pub fn environment(
    preset: &str,
    params_path: Option<PathBuf>,
    locale: Option<String>,
) -> anyhow::Result<()> {
    let preset = presets::find(preset)
        .with_context(|| format!("Unknown preset '{}', run `kino-cli presets`", preset))?;
    let params = load_params(params_path.as_deref())?;

    let mut env = PlayerEnvironment::load(preset.input(), &preset.probe(), params)?;
    if let Some(locale) = locale {
        env.set_locale(&locale);
    }

    let mut value = serde_json::to_value(&env)?;
    value["locale"] = serde_json::Value::String(env.locale());
    println!("{}", output::to_json(&value));
    Ok(())
}

fn load_params(path: Option<&Path>) -> anyhow::Result<PlayerParams> {
    let Some(path) = path else {
        return Ok(PlayerParams::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(PlayerParams::from_json(&json)?)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Invalid JSON in {}", path.display()))
}
