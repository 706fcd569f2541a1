// mediamanifest-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mediamanifest: custom media manifest generator",
    long_about = "Classifies video, audio and subtitle files (or https URLs) and writes a \
                  custom media manifest describing them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Builds a manifest from media files, https URLs, or a single directory
    Generate(GenerateArgs),
    /// Probes a single video file and shows the values a manifest would use
    Info(InfoArgs),
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Media files and/or https URLs, in manifest order, or a single directory
    #[arg(required = true, value_name = "INPUTS")]
    pub inputs: Vec<String>,

    /// Configuration file (defaults to config.json next to the executable)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "MEDIAMANIFEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the configured base URL (must start with https://)
    #[arg(long, value_name = "URL", env = "MEDIAMANIFEST_BASE_URL")]
    pub base_url: Option<String>,

    /// Directory to write the manifest to (defaults to the first source's folder)
    #[arg(short, long, value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the manifest to stdout instead of writing files. A missing
    /// config file is still created with defaults.
    #[arg(long, default_value_t = false)]
    pub stdout: bool,
}

#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Local video file or https URL to probe
    #[arg(required = true, value_name = "VIDEO")]
    pub input: String,

    /// Print the probed values as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
