//! CLI parse: clap types for the profile validator. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// Validate profile JSON documents against the profile schema and content rules
#[derive(Debug, Parser)]
#[command(name = "validate-profiles")]
#[command(about = "Validate profile JSON documents against the profile schema and content rules")]
pub struct Cli {
    /// Profile root directory (default: profiles, or the configured root)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Directory searched for profile-validator.toml
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
