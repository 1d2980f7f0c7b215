//! Configuration for overriding platform defaults.
//!
//! Stores configuration in JSON format at `~/.portpid/config.json`.
//! Every field is optional; a missing file means "use the defaults".
//!
//! ```json
//! {
//!   "commands": ["ss -tunlp"],
//!   "addressColumn": 4,
//!   "pidColumn": 6
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{Error, Result};

/// Configuration data stored in JSON format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Commands to run instead of the platform's built-in ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<String>>,

    /// Zero-based index of the local address column.
    #[serde(default, rename = "addressColumn", skip_serializing_if = "Option::is_none")]
    pub address_column: Option<usize>,

    /// Zero-based index of the owning process column.
    #[serde(default, rename = "pidColumn", skip_serializing_if = "Option::is_none")]
    pub pid_column: Option<usize>,
}

/// Configuration store for reading settings from disk.
///
/// Handles reading configuration from `~/.portpid/config.json`.
pub struct ConfigStore {
    /// Path to the configuration file.
    config_path: PathBuf,
}

impl ConfigStore {
    /// Create a new config store with the default path.
    ///
    /// Default path: `~/.portpid/config.json`
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Config("Could not determine home directory".to_string()))?;

        let config_path = home.join(".portpid").join("config.json");

        Ok(Self { config_path })
    }

    /// Create a config store with a custom path.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Get the configuration file path.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration from disk.
    ///
    /// Returns default config if the file doesn't exist.
    pub async fn load(&self) -> Result<Config> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&self.config_path)
            .await
            .map_err(|e| Error::Config(format!("Failed to read config: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_store() -> (ConfigStore, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        (ConfigStore::with_path(path), dir)
    }

    #[tokio::test]
    async fn test_load_nonexistent() {
        let (store, _dir) = test_store();
        let config = store.load().await.unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_load_overrides() {
        let (store, _dir) = test_store();
        std::fs::write(
            store.path(),
            r#"{"commands": ["netstat -tunlp"], "pidColumn": 6}"#,
        )
        .unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.commands, Some(vec!["netstat -tunlp".to_string()]));
        assert_eq!(config.address_column, None);
        assert_eq!(config.pid_column, Some(6));
    }

    #[tokio::test]
    async fn test_load_empty_object() {
        let (store, _dir) = test_store();
        std::fs::write(store.path(), "{}").unwrap();
        assert_eq!(store.load().await.unwrap(), Config::default());
    }

    #[tokio::test]
    async fn test_load_malformed() {
        let (store, _dir) = test_store();
        std::fs::write(store.path(), "{ not json").unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg.starts_with("Failed to parse config")));
    }

    #[test]
    fn test_serialize_skips_unset() {
        let config = Config {
            address_column: Some(1),
            ..Config::default()
        };
        assert_eq!(serde_json::to_string(&config).unwrap(), r#"{"addressColumn":1}"#);
    }
}
