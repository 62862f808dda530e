use super::app_config::{LayoutProfile, LogLevel};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "resif",
    version,
    about = "A terminal client for booking department rooms",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable mouse capture.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Spacing profile.
    #[arg(long, value_enum)]
    pub layout: Option<LayoutProfile>,

    /// Toast duration in seconds.
    #[arg(long)]
    pub notification_duration: Option<u64>,

    /// Enable `TachyonFX` animations.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
