//! # Storage Manager
//!
//! Typed access to a [`KeyValueStore`] that never fails outward. A read
//! that hits an I/O error or a malformed override blob logs the failure and
//! returns the default; a write that fails logs and returns `false`, leaving
//! the caller's in-memory state authoritative.

use std::sync::Arc;

use scc_core::OverrideMap;

use crate::{keys, KeyValueStore};

/// Fault-tolerant wrapper over one storage scope.
#[derive(Clone)]
pub struct StorageManager {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for StorageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageManager").finish_non_exhaustive()
    }
}

impl StorageManager {
    /// Wrap a store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The wrapped store.
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Raw string value, `None` when absent or unreadable.
    pub fn load_string(&self, key: &str) -> Option<String> {
        match self.store.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(key, error = %e, "failed to read from storage");
                None
            }
        }
    }

    /// Store a raw string. Returns whether the write succeeded.
    pub fn save_string(&self, key: &str, value: &str) -> bool {
        match self.store.set_item(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key, error = %e, "failed to write to storage");
                false
            }
        }
    }

    /// Delete a key. Returns whether the delete succeeded.
    pub fn remove(&self, key: &str) -> bool {
        match self.store.remove_item(key) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(key, error = %e, "failed to remove from storage");
                false
            }
        }
    }

    /// The persisted override map; empty when absent or malformed.
    pub fn load_custom_scores(&self) -> OverrideMap {
        let Some(text) = self.load_string(keys::CUSTOM_SCORES) else {
            return OverrideMap::new();
        };
        match OverrideMap::from_json(&text) {
            Ok(map) => map,
            Err(e) => {
                tracing::error!(error = %e, "error loading custom scores");
                OverrideMap::new()
            }
        }
    }

    /// Persist the override map. Returns whether the write succeeded.
    pub fn save_custom_scores(&self, overrides: &OverrideMap) -> bool {
        let saved = match overrides.to_json() {
            Ok(text) => self.save_string(keys::CUSTOM_SCORES, &text),
            Err(e) => {
                tracing::error!(error = %e, "error saving custom scores");
                false
            }
        };
        if saved {
            metrics::counter!("scc_override_writes_total").increment(1);
            tracing::debug!(entries = overrides.len(), "saved custom scores");
        }
        saved
    }

    /// Remove the override map key.
    pub fn clear_custom_scores(&self) -> bool {
        self.remove(keys::CUSTOM_SCORES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, StorageError};
    use scc_core::ScoreOverride;

    /// A store whose every operation fails.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::QuotaExceeded {
                key: key.into(),
                needed: 1,
                quota: 0,
            })
        }
        fn set_item(&self, key: &str, _: &str) -> Result<(), StorageError> {
            self.get_item(key).map(|_| ())
        }
        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            self.get_item(key).map(|_| ())
        }
        fn clear(&self) -> Result<(), StorageError> {
            self.get_item("").map(|_| ())
        }
        fn keys(&self) -> Result<Vec<String>, StorageError> {
            self.get_item("").map(|_| Vec::new())
        }
    }

    fn memory() -> StorageManager {
        StorageManager::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn custom_scores_round_trip() {
        let manager = memory();
        let mut map = OverrideMap::new();
        map.insert("aws", ScoreOverride::both(60, 70));
        assert!(manager.save_custom_scores(&map));
        assert_eq!(manager.load_custom_scores(), map);
        assert!(manager.clear_custom_scores());
        assert!(manager.load_custom_scores().is_empty());
        assert_eq!(manager.load_string(keys::CUSTOM_SCORES), None);
    }

    #[test]
    fn malformed_custom_scores_load_empty() {
        let manager = memory();
        manager.save_string(keys::CUSTOM_SCORES, "{oops");
        assert!(manager.load_custom_scores().is_empty());
    }

    #[test]
    fn failing_backend_never_fails_outward() {
        let manager = StorageManager::new(Arc::new(BrokenStore));
        assert_eq!(manager.load_string("k"), None);
        assert!(!manager.save_string("k", "v"));
        assert!(!manager.remove("k"));
        assert!(manager.load_custom_scores().is_empty());
        assert!(!manager.save_custom_scores(&OverrideMap::new()));
    }

    #[test]
    fn quota_failure_reports_false() {
        let manager = StorageManager::new(Arc::new(MemoryStore::with_quota(8)));
        let mut map = OverrideMap::new();
        map.insert("aws", ScoreOverride::both(60, 70));
        assert!(!manager.save_custom_scores(&map));
        assert!(manager.load_custom_scores().is_empty());
    }
}
