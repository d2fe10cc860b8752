//! Persisted tracker configuration
//!
//! A JSON dotfile in the user's home directory holds the selected chain,
//! the optional Etherscan API key and the auto-start flag. A missing or
//! unreadable file falls back to defaults so the tracker always starts.

use crate::{error::ConfigError, types::Chain};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

/// File name of the config dotfile in the home directory
const CONFIG_FILE_NAME: &str = ".chain_fee_tracker.json";

/// On-disk configuration shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigData {
    /// Selected chain ("ethereum" or "bitcoin")
    pub chain: Chain,
    /// Etherscan API key; empty means unset
    pub api_key: String,
    /// Whether the embedding app registers itself as a login item
    pub auto_start: bool,
}

impl Default for ConfigData {
    fn default() -> Self {
        Self {
            chain: Chain::default(),
            api_key: String::new(),
            auto_start: false,
        }
    }
}

/// Persisted configuration store
///
/// Reads are snapshots of in-memory state; writes update the state and
/// persist the whole file synchronously.
pub struct ConfigStore {
    path: PathBuf,
    state: RwLock<ConfigData>,
}

impl ConfigStore {
    /// Opens the store at the default location (`~/.chain_fee_tracker.json`)
    pub fn open_default() -> Self {
        let path = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE_NAME);
        Self::open(path)
    }

    /// Opens the store at an explicit path, loading existing content
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = Self::load_from(&path);
        Self {
            path,
            state: RwLock::new(state),
        }
    }

    fn load_from(path: &Path) -> ConfigData {
        match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                log::warn!(
                    "Ignoring unreadable config at {}: {}",
                    path.display(),
                    err
                );
                ConfigData::default()
            }),
            Err(_) => ConfigData::default(),
        }
    }

    fn persist(&self, state: &ConfigData) -> Result<(), ConfigError> {
        let raw = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Atomic snapshot of the fields one poll cycle needs
    pub async fn snapshot(&self) -> (Chain, String) {
        let state = self.state.read().await;
        (state.chain, state.api_key.clone())
    }

    /// Currently selected chain
    pub async fn chain(&self) -> Chain {
        self.state.read().await.chain
    }

    /// Configured API key; empty means unset
    pub async fn api_key(&self) -> String {
        self.state.read().await.api_key.clone()
    }

    /// Whether auto-start is enabled
    pub async fn auto_start(&self) -> bool {
        self.state.read().await.auto_start
    }

    /// Selects a chain and persists the change
    pub async fn set_chain(&self, chain: Chain) -> Result<(), ConfigError> {
        let mut state = self.state.write().await;
        state.chain = chain;
        self.persist(&state)
    }

    /// Stores an API key and persists the change
    pub async fn set_api_key(&self, api_key: String) -> Result<(), ConfigError> {
        let mut state = self.state.write().await;
        state.api_key = api_key;
        self.persist(&state)
    }

    /// Stores the auto-start flag and persists the change
    pub async fn set_auto_start(&self, enabled: bool) -> Result<(), ConfigError> {
        let mut state = self.state.write().await;
        state.auto_start = enabled;
        self.persist(&state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::open(dir.path().join("config.json"));
        assert_eq!(store.chain().await, Chain::Ethereum);
        assert_eq!(store.api_key().await, "");
        assert!(!store.auto_start().await);
    }

    #[tokio::test]
    async fn corrupt_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        let store = ConfigStore::open(&path);
        assert_eq!(store.chain().await, Chain::Ethereum);
    }

    #[tokio::test]
    async fn writes_round_trip_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let store = ConfigStore::open(&path);
        store.set_chain(Chain::Bitcoin).await.unwrap();
        store.set_api_key("KEY42".to_string()).await.unwrap();
        store.set_auto_start(true).await.unwrap();

        let reloaded = ConfigStore::open(&path);
        assert_eq!(reloaded.chain().await, Chain::Bitcoin);
        assert_eq!(reloaded.api_key().await, "KEY42");
        assert!(reloaded.auto_start().await);
    }

    #[tokio::test]
    async fn file_uses_snake_case_field_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let store = ConfigStore::open(&path);
        store.set_chain(Chain::Bitcoin).await.unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["chain"], "bitcoin");
        assert!(value.get("api_key").is_some());
        assert!(value.get("auto_start").is_some());
    }

    #[tokio::test]
    async fn unknown_fields_are_tolerated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"chain":"bitcoin","api_key":"k","auto_start":false,"legacy":1}"#,
        )
        .unwrap();
        let store = ConfigStore::open(&path);
        assert_eq!(store.chain().await, Chain::Bitcoin);
        assert_eq!(store.api_key().await, "k");
    }

    #[tokio::test]
    async fn snapshot_reads_both_fields_at_once() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::open(dir.path().join("config.json"));
        store.set_api_key("snap".to_string()).await.unwrap();

        let (chain, key) = store.snapshot().await;
        assert_eq!(chain, Chain::Ethereum);
        assert_eq!(key, "snap");
    }
}
