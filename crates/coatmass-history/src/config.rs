//! History configuration.
//!
//! Settings live in an optional `history.toml` in the platform-specific
//! configuration folder:
//! - macOS: ~/Library/Application Support/com.coatmass.Coatmass/
//! - Windows: %APPDATA%/coatmass/Coatmass/config/
//! - Linux: ~/.config/coatmass/
//!
//! ```toml
//! capacity = 10
//! slot_key = "paintCalculatorHistory"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "coatmass";
const APP_NAME: &str = "Coatmass";
const CONFIG_FILENAME: &str = "history.toml";

/// Entries kept before the oldest are evicted.
pub const DEFAULT_CAPACITY: usize = 10;

/// Slot key the browser calculator used for its log.
pub const DEFAULT_SLOT_KEY: &str = "paintCalculatorHistory";

/// Configuration for a [`HistoryStore`](crate::HistoryStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum number of entries. Values below 1 are treated as 1.
    pub capacity: usize,

    /// Name of the slot the log is stored under.
    pub slot_key: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            slot_key: DEFAULT_SLOT_KEY.to_string(),
        }
    }
}

impl HistoryConfig {
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_slot_key(mut self, key: impl Into<String>) -> Self {
        self.slot_key = key.into();
        self
    }

    /// Capacity actually enforced by the store.
    pub fn effective_capacity(&self) -> usize {
        self.capacity.max(1)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
}

/// Get the path to the configuration file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Directory file-backed slots are stored in by default.
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// Load the configuration from `path`.
///
/// Returns the default configuration if the file doesn't exist or cannot
/// be parsed.
pub fn load_config(path: &Path) -> HistoryConfig {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => {
                tracing::info!("Loaded history config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse history config: {}, using defaults", e);
                HistoryConfig::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No history config at {:?}, using defaults", path);
            HistoryConfig::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read history config: {}, using defaults", e);
            HistoryConfig::default()
        }
    }
}

/// Load the configuration from [`config_path`], falling back to defaults.
pub fn load_default_config() -> HistoryConfig {
    match config_path() {
        Some(path) => load_config(&path),
        None => {
            tracing::warn!("Could not determine config path, using defaults");
            HistoryConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = HistoryConfig::default();
        assert_eq!(config.capacity, 10);
        assert_eq!(config.slot_key, "paintCalculatorHistory");
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let config = HistoryConfig::default().with_capacity(0);
        assert_eq!(config.effective_capacity(), 1);
    }

    #[test]
    fn test_load_partial_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "capacity = 25\n").unwrap();

        let config = load_config(&path);
        assert_eq!(config.capacity, 25);
        assert_eq!(config.slot_key, DEFAULT_SLOT_KEY);
    }

    #[test]
    fn test_load_invalid_toml_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "capacity = \"many\"").unwrap();

        assert_eq!(load_config(&path), HistoryConfig::default());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        assert_eq!(
            load_config(&dir.path().join("absent.toml")),
            HistoryConfig::default()
        );
    }

    #[test]
    fn test_config_round_trip() {
        let config = HistoryConfig::default()
            .with_capacity(3)
            .with_slot_key("tank-farm");
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: HistoryConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
