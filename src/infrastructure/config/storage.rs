//! Locating and loading the TOML config file.

use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Resolves the config file under the platform config directory.
pub struct StorageManager {
    default_path: PathBuf,
}

impl StorageManager {
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigDirNotFound` when the platform has no
    /// config directory for the current user.
    pub fn new() -> Result<Self, ConfigError> {
        let dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .ok_or(ConfigError::ConfigDirNotFound)?;
        Ok(Self {
            default_path: dirs.config_dir().join(CONFIG_FILE_NAME),
        })
    }

    #[cfg(test)]
    fn in_dir(dir: &Path) -> Self {
        Self {
            default_path: dir.join(CONFIG_FILE_NAME),
        }
    }

    /// Loads the config from `path_override` or the default location.
    ///
    /// A missing file is created with the defaults. A malformed file is left
    /// untouched and the defaults are used for this run.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the defaults
    /// cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = path_override.unwrap_or(self.default_path.as_path());

        if !path.exists() {
            info!(?path, "Config file not found, writing defaults");
            let config = AppConfig::default();
            write_atomically(path, &toml::to_string_pretty(&config)?)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content).unwrap_or_else(|e| {
            warn!(?path, error = %e, "Malformed config file, using defaults");
            AppConfig::default()
        }))
    }
}

fn write_atomically(path: &Path, content: &str) -> Result<(), ConfigError> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::LayoutProfile;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("resif");
        let manager = StorageManager::in_dir(&nested);

        let config = manager.load_config(None).unwrap();
        assert!(config.ui.enable_animations);

        let written = fs::read_to_string(nested.join(CONFIG_FILE_NAME)).unwrap();
        let reparsed: AppConfig = toml::from_str(&written).unwrap();
        assert_eq!(reparsed.ui.layout, config.ui.layout);
    }

    #[test]
    fn test_malformed_file_falls_back_and_is_kept() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::in_dir(dir.path());
        let config_file = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_file, "invalid_toml = [").unwrap();

        let config = manager.load_config(None).unwrap();
        assert_eq!(config.ui.layout, LayoutProfile::Comfortable);
        assert_eq!(fs::read_to_string(&config_file).unwrap(), "invalid_toml = [");
    }

    #[test]
    fn test_override_path_wins() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::in_dir(&dir.path().join("unused"));
        let custom = dir.path().join("custom.toml");
        fs::write(&custom, "[ui]\nlayout = \"compact\"\nnotification_duration = 9\n").unwrap();

        let config = manager.load_config(Some(&custom)).unwrap();
        assert_eq!(config.ui.layout, LayoutProfile::Compact);
        assert_eq!(config.ui.notification_duration, 9);
        assert!(!dir.path().join("unused").exists());
    }
}
