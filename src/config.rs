//! Persisted target-name configuration.
//!
//! The configuration is a small JSON file holding the list of folder names
//! the scanner searches for, e.g. `{ "targets": ["node_modules"] }`. Loading
//! is always best-effort: an absent or unparsable file yields the default
//! single-element list. Saving overwrites the file with pretty-printed JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SweepError};
use crate::sweep::DEFAULT_TARGET;

/// The persisted configuration document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Folder names the scanner searches for
    #[serde(default = "default_targets")]
    pub targets: Vec<String>,
}

fn default_targets() -> Vec<String> {
    vec![DEFAULT_TARGET.to_string()]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            targets: default_targets(),
        }
    }
}

/// Loads and saves the configuration file.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Create a store for an explicit path, or the default location
    /// (`dirsweep/config.json` under the user configuration directory)
    /// when none is given.
    pub fn new(path: Option<PathBuf>) -> Self {
        let path = path.unwrap_or_else(|| {
            dirs::config_dir()
                .map(|dir| dir.join("dirsweep").join("config.json"))
                .unwrap_or_else(|| PathBuf::from("dirsweep.json"))
        });
        Self { path }
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration, falling back to the default target list if
    /// the file is absent or unparsable.
    pub fn load(&self) -> AppConfig {
        match fs::read_to_string(&self.path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
            Err(_) => AppConfig::default(),
        }
    }

    /// Overwrite the configuration file with pretty-printed JSON, creating
    /// parent directories as needed.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SweepError::IoError {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = serde_json::to_string_pretty(config)
            .map_err(|err| SweepError::ConfigError(err.to_string()))?;
        fs::write(&self.path, json).map_err(|source| SweepError::IoError {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn store_in(dir: &TempDir) -> ConfigStore {
        ConfigStore::new(Some(dir.path().join("config.json")))
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let config = store.load();
        assert_eq!(config.targets, vec!["node_modules"]);
    }

    #[test]
    fn test_load_unparsable_file_returns_default() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::write(store.path(), "not json {").unwrap();

        let config = store.load();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let config = AppConfig {
            targets: vec!["node_modules".to_string(), "target".to_string()],
        };
        store.save(&config).unwrap();

        assert_eq!(store.load(), config);
        // Human-readable structured format on disk
        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"targets\""));
        assert!(raw.lines().count() > 1);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::new(Some(temp.path().join("nested").join("config.json")));

        store.save(&AppConfig::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_missing_targets_field_defaults() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::write(store.path(), "{}").unwrap();

        assert_eq!(store.load().targets, vec!["node_modules"]);
    }
}
