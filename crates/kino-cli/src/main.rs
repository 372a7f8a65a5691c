//! Kino CLI - Browser capability inspector
//!
//! Features:
//! - Capability detection for synthetic or preset browser environments
//! - Backend endpoint resolution from player parameters
//! - Full player environment dumps

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod output;
mod presets;

/// Kino CLI - Player environment toolkit
#[derive(Parser)]
#[command(name = "kino-cli")]
#[command(author = "Purple Squirrel Media")]
#[command(version)]
#[command(about = "Inspect how the player sees a browser environment", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json, table)
    #[arg(short, long, default_value = "text", global = true)]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect capability flags for a browser environment
    Detect(commands::DetectArgs),

    /// List built-in browser presets
    Presets,

    /// Resolve backend endpoints
    Endpoints {
        /// Player parameters JSON file
        #[arg(short, long)]
        params: Option<PathBuf>,

        /// Resolve https endpoints
        #[arg(short, long)]
        secure: bool,
    },

    /// Load a full player environment (always JSON)
    Environment {
        /// Preset to load
        preset: String,

        /// Player parameters JSON file
        #[arg(short, long)]
        params: Option<PathBuf>,

        /// Force the player locale
        #[arg(short, long)]
        locale: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Detect(args) => {
            commands::detect(args, &cli.format)?;
        }
        Commands::Presets => {
            commands::list_presets(&cli.format)?;
        }
        Commands::Endpoints { params, secure } => {
            commands::endpoints(params, secure, &cli.format)?;
        }
        Commands::Environment { preset, params, locale } => {
            commands::environment(&preset, params, locale)?;
        }
    }

    Ok(())
}
