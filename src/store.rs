//! In-memory store for the current status line

use crate::constants::LOADING_STATUS;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct StatusEntry {
    text: String,
    updated_at: Option<DateTime<Utc>>,
}

/// Holds the latest committed status line
///
/// One writer (the poll loop) replaces it; any number of readers take
/// cheap snapshots. Starts at the loading placeholder and is never blank
/// once the first cycle has published.
pub struct StatusStore {
    current: RwLock<StatusEntry>,
}

impl StatusStore {
    /// Creates a store showing the loading placeholder
    pub fn new() -> Self {
        Self {
            current: RwLock::new(StatusEntry {
                text: LOADING_STATUS.to_string(),
                updated_at: None,
            }),
        }
    }

    /// Replaces the current status line
    pub async fn set(&self, text: String) {
        let mut current = self.current.write().await;
        log::debug!("Status updated: {}", text);
        current.text = text;
        current.updated_at = Some(Utc::now());
    }

    /// Latest committed status line
    pub async fn get(&self) -> String {
        self.current.read().await.text.clone()
    }

    /// When the status was last published, if ever
    pub async fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.current.read().await.updated_at
    }
}

impl Default for StatusStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_at_the_loading_placeholder() {
        let store = StatusStore::new();
        assert_eq!(store.get().await, "Loading...");
        assert!(store.last_updated().await.is_none());
    }

    #[tokio::test]
    async fn set_replaces_text_and_stamps_time() {
        let store = StatusStore::new();
        store.set("Ξ S:1.00 F:2.00".to_string()).await;
        assert_eq!(store.get().await, "Ξ S:1.00 F:2.00");
        assert!(store.last_updated().await.is_some());
    }

    #[tokio::test]
    async fn latest_write_wins() {
        let store = StatusStore::new();
        store.set("Ξ Timeout".to_string()).await;
        store.set("Ξ S:3.00 F:4.00".to_string()).await;
        assert_eq!(store.get().await, "Ξ S:3.00 F:4.00");
    }
}
