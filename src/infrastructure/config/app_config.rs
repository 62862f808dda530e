//! Application configuration.

use super::args::CliArgs;
use crate::domain::keybinding::Action;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "resif";
pub(crate) const APP_QUALIFIER: &str = "id";
pub(crate) const APP_ORGANIZATION: &str = "its";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Spacing profile shared by every screen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LayoutProfile {
    /// Roomy cards and padding.
    #[default]
    Comfortable,
    /// Dense layout for small terminals.
    Compact,
}

impl std::fmt::Display for LayoutProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Comfortable => write!(f, "comfortable"),
            Self::Compact => write!(f, "compact"),
        }
    }
}

/// Application configuration, loaded from TOML and overridden by CLI flags.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Enable mouse capture.
    #[serde(default)]
    pub mouse: bool,

    /// Custom keybindings, e.g. `"Ctrl+q" = "Quit"`.
    #[serde(default)]
    pub keybindings: HashMap<String, Action>,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Spacing profile.
    #[serde(default)]
    pub layout: LayoutProfile,

    /// Enable `TachyonFX` animations.
    #[serde(default = "default_true")]
    pub enable_animations: bool,

    /// Toast duration in seconds.
    #[serde(default = "default_notification_duration")]
    pub notification_duration: u64,

    /// Name shown when the session profile has none.
    #[serde(default = "default_display_name")]
    pub default_display_name: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            layout: LayoutProfile::default(),
            enable_animations: true,
            notification_duration: default_notification_duration(),
            default_display_name: default_display_name(),
        }
    }
}

/// Theme mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark mode (default).
    #[default]
    Dark,
    /// Light mode.
    Light,
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    /// Theme mode (Dark, Light).
    #[serde(default)]
    pub mode: ThemeMode,
}

fn default_accent_color() -> String {
    "#20469B".to_string()
}

fn default_display_name() -> String {
    "Guest".to_string()
}

fn default_true() -> bool {
    true
}

fn default_notification_duration() -> u64 {
    2
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            mode: ThemeMode::default(),
        }
    }
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(mouse) = args.mouse {
            self.mouse = mouse;
        }
        if let Some(layout) = args.layout {
            self.ui.layout = layout;
        }
        if let Some(notification_duration) = args.notification_duration {
            self.ui.notification_duration = notification_duration;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("resif.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            mouse: false,
            keybindings: HashMap::new(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use test_case::test_case;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
            log_level = "debug"

            [ui]
            layout = "compact"
            enable_animations = false
            default_display_name = "Nabilah Atika"

            [theme]
            accent_color = "Cyan"

            [keybindings]
            "Ctrl+q" = "Quit"
            "b" = "GoBooking"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.ui.layout, LayoutProfile::Compact);
        assert!(!config.ui.enable_animations);
        assert_eq!(config.ui.notification_duration, 2);
        assert_eq!(config.ui.default_display_name, "Nabilah Atika");
        assert_eq!(config.theme.accent_color, "Cyan");

        assert_eq!(config.keybindings.len(), 2);
        assert_eq!(config.keybindings.get("Ctrl+q"), Some(&Action::Quit));
        assert_eq!(config.keybindings.get("b"), Some(&Action::GoBooking));
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert!(config.keybindings.is_empty());
        assert_eq!(config.ui.layout, LayoutProfile::Comfortable);
        assert!(config.ui.enable_animations);
        assert_eq!(config.theme.accent_color, "#20469B");
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "resif",
            "--layout",
            "compact",
            "--notification-duration",
            "7",
            "--accent-color",
            "Red",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.ui.layout, LayoutProfile::Compact);
        assert_eq!(config.ui.notification_duration, 7);
        assert_eq!(config.theme.accent_color, "Red");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test_case(LogLevel::Trace, tracing::Level::TRACE ; "trace")]
    #[test_case(LogLevel::Info, tracing::Level::INFO ; "info")]
    #[test_case(LogLevel::Error, tracing::Level::ERROR ; "error")]
    fn test_log_level_filter_names(level: LogLevel, expected: tracing::Level) {
        assert_eq!(level.to_tracing_level(), expected);
        assert_eq!(
            level.to_string(),
            expected.to_string().to_ascii_lowercase()
        );
    }
}
