//! # In-Memory Store
//!
//! A [`KeyValueStore`] whose handles share one map, the way browser tabs of
//! one origin share `localStorage`. A handle opened with
//! [`MemoryStore::open_tab`] sees every write made through any other handle,
//! and its subscribers receive a [`StorageEvent`] for each such write. The
//! writing handle's own subscribers are not notified.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::{KeyValueStore, StorageError, StorageEvent};

#[derive(Debug, Default)]
struct Shared {
    data: RwLock<BTreeMap<String, String>>,
    subscribers: Mutex<Vec<(u64, Sender<StorageEvent>)>>,
    next_handle: AtomicU64,
    quota: Option<usize>,
}

/// Shared in-memory storage handle.
///
/// Cloning a handle yields the *same* tab; use [`open_tab`](Self::open_tab)
/// for a second tab.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    shared: Arc<Shared>,
    handle: u64,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store without a quota.
    pub fn new() -> Self {
        Self::from_shared(Shared::default())
    }

    /// Create an empty store whose keys and values together may not exceed
    /// `bytes`.
    pub fn with_quota(bytes: usize) -> Self {
        Self::from_shared(Shared {
            quota: Some(bytes),
            ..Shared::default()
        })
    }

    fn from_shared(shared: Shared) -> Self {
        let handle = shared.next_handle.fetch_add(1, Ordering::Relaxed);
        Self {
            shared: Arc::new(shared),
            handle,
        }
    }

    /// Open another handle on the same map.
    pub fn open_tab(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            handle: self.shared.next_handle.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Receive change events caused by *other* handles.
    pub fn subscribe(&self) -> Receiver<StorageEvent> {
        let (tx, rx) = channel();
        self.shared.subscribers.lock().push((self.handle, tx));
        rx
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.shared.data.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn notify(&self, event: StorageEvent) {
        let mut subscribers = self.shared.subscribers.lock();
        subscribers.retain(|(handle, tx)| {
            if *handle == self.handle {
                return true;
            }
            tx.send(event.clone()).is_ok()
        });
    }

    fn used_bytes(data: &BTreeMap<String, String>) -> usize {
        data.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.shared.data.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let old_value = {
            let mut data = self.shared.data.write();
            if let Some(quota) = self.shared.quota {
                let current = data.get(key).map_or(0, |v| key.len() + v.len());
                let needed = Self::used_bytes(&data) - current + key.len() + value.len();
                if needed > quota {
                    return Err(StorageError::QuotaExceeded {
                        key: key.to_string(),
                        needed,
                        quota,
                    });
                }
            }
            data.insert(key.to_string(), value.to_string())
        };
        self.notify(StorageEvent {
            key: Some(key.to_string()),
            old_value,
            new_value: Some(value.to_string()),
        });
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let old_value = self.shared.data.write().remove(key);
        if old_value.is_some() {
            self.notify(StorageEvent {
                key: Some(key.to_string()),
                old_value,
                new_value: None,
            });
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let had_entries = {
            let mut data = self.shared.data.write();
            let had = !data.is_empty();
            data.clear();
            had
        };
        if had_entries {
            self.notify(StorageEvent {
                key: None,
                old_value: None,
                new_value: None,
            });
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.shared.data.read().keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("k").unwrap(), None);
        store.set_item("k", "v").unwrap();
        assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
        store.remove_item("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn tabs_share_data() {
        let a = MemoryStore::new();
        let b = a.open_tab();
        a.set_item("theme", "dark").unwrap();
        assert_eq!(b.get_item("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn other_tabs_are_notified_but_not_the_writer() {
        let a = MemoryStore::new();
        let b = a.open_tab();
        let a_events = a.subscribe();
        let b_events = b.subscribe();

        a.set_item("k", "1").unwrap();
        a.set_item("k", "2").unwrap();

        assert!(a_events.try_recv().is_err());
        let first = b_events.try_recv().unwrap();
        assert_eq!(first.key.as_deref(), Some("k"));
        assert_eq!(first.old_value, None);
        assert_eq!(first.new_value.as_deref(), Some("1"));
        let second = b_events.try_recv().unwrap();
        assert_eq!(second.old_value.as_deref(), Some("1"));
        assert_eq!(second.new_value.as_deref(), Some("2"));
    }

    #[test]
    fn removing_missing_key_is_silent() {
        let a = MemoryStore::new();
        let b = a.open_tab();
        let events = b.subscribe();
        a.remove_item("nothing").unwrap();
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn clear_sends_keyless_event() {
        let a = MemoryStore::new();
        let b = a.open_tab();
        a.set_item("k", "v").unwrap();
        let events = b.subscribe();
        a.clear().unwrap();
        let event = events.try_recv().unwrap();
        assert_eq!(event.key, None);
        assert!(b.is_empty());
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let a = MemoryStore::new();
        let b = a.open_tab();
        drop(b.subscribe());
        a.set_item("k", "v").unwrap();
        assert!(a.shared.subscribers.lock().is_empty());
    }

    #[test]
    fn quota_is_enforced() {
        let store = MemoryStore::with_quota(10);
        store.set_item("ab", "cdef").unwrap();
        let err = store.set_item("gh", "ijklmn").unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { needed: 14, quota: 10, .. }));
        // Replacing an existing value only counts the difference.
        store.set_item("ab", "cdefghij").unwrap();
        assert_eq!(store.get_item("ab").unwrap().as_deref(), Some("cdefghij"));
    }
}
