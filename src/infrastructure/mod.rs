//! Infrastructure layer with configuration and content adapters.

/// Static room catalog.
pub mod catalog;
/// Application configuration.
pub mod config;

pub use catalog::StaticCatalog;
pub use config::{AppConfig, CliArgs, ConfigError, LayoutProfile, LogLevel, StorageManager};
