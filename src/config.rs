//! Dashboard configuration (`config.toml` in the data directory)

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::FileStore;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "STUDYLOOM_DATA_DIR";

/// Configuration file name inside the base directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Fastest ticker period accepted from config
const MIN_TICK_MILLIS: u64 = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

/// Settings read from `config.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Where widget documents live; defaults to the base directory itself
    pub data_dir: Option<PathBuf>,
    /// Pomodoro ticker period in milliseconds (one tick = one second of countdown)
    pub tick_millis: u64,
    /// Use ANSI colors in plain CLI output
    pub color: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            tick_millis: 1000,
            color: true,
        }
    }
}

impl DashboardConfig {
    /// Load `config.toml` from `base_dir`. A missing file yields the defaults.
    pub fn load(base_dir: &Path) -> Result<Self, ConfigError> {
        let path = base_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: DashboardConfig = toml::from_str(&content)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis.max(MIN_TICK_MILLIS))
    }

    /// Directory widget documents are stored in, relative paths resolve
    /// against `base_dir`
    pub fn store_dir(&self, base_dir: &Path) -> PathBuf {
        match &self.data_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => base_dir.join(dir),
            None => base_dir.to_path_buf(),
        }
    }
}

/// Resolve the base directory: explicit flag, then environment, then the
/// platform default.
pub fn resolve_base_dir(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    FileStore::default_data_dir().map_err(|_| ConfigError::DataDirNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = DashboardConfig::load(temp.path()).unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.tick_period(), Duration::from_secs(1));
    }

    #[test]
    fn test_partial_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "tick_millis = 250\n").unwrap();

        let config = DashboardConfig::load(temp.path()).unwrap();
        assert_eq!(config.tick_millis, 250);
        assert!(config.color);
        assert_eq!(config.store_dir(temp.path()), temp.path());
    }

    #[test]
    fn test_relative_data_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "data_dir = \"widgets\"\ncolor = false\n",
        )
        .unwrap();

        let config = DashboardConfig::load(temp.path()).unwrap();
        assert!(!config.color);
        assert_eq!(config.store_dir(temp.path()), temp.path().join("widgets"));
    }

    #[test]
    fn test_tick_period_has_floor() {
        let config = DashboardConfig {
            tick_millis: 0,
            ..Default::default()
        };
        assert_eq!(config.tick_period(), Duration::from_millis(MIN_TICK_MILLIS));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "tick_millis = \"fast\"").unwrap();
        assert!(matches!(
            DashboardConfig::load(temp.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_explicit_base_dir_wins() {
        let dir = PathBuf::from("/tmp/studyloom-explicit");
        assert_eq!(resolve_base_dir(Some(dir.clone())).unwrap(), dir);
    }
}
