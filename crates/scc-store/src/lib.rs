//! # scc-store — Compass Key/Value Storage
//!
//! Persistence for the compass is a flat string → string map per scope,
//! mirroring browser `localStorage` and `sessionStorage`:
//!
//! - [`KeyValueStore`] — the backend trait.
//! - [`MemoryStore`] — shared in-memory map with per-handle change
//!   notifications (one handle per "tab").
//! - [`FileStore`] — one JSON object file, rewritten atomically.
//! - [`StorageManager`] — typed, fault-tolerant access for the page
//!   controllers. Reads never fail outward; failures are logged and the
//!   caller receives the default.

pub mod error;
pub mod file;
pub mod manager;
pub mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use manager::StorageManager;
pub use memory::MemoryStore;

/// Well-known storage keys.
pub mod keys {
    /// Override map JSON in persistent storage.
    pub const CUSTOM_SCORES: &str = "scc_custom_provider_scores";
    /// Theme name in persistent storage.
    pub const THEME: &str = "theme";
    /// Session flag set after a successful password check.
    pub const SESSION_UNLOCKED: &str = "compassUnlocked";
    /// Session flag set when public mode is chosen.
    pub const SESSION_PUBLIC: &str = "compassPublic";
    /// Value stored under the session flags.
    pub const FLAG_TRUE: &str = "true";
}

/// File name of the persistent scope inside a data directory.
pub const LOCAL_STORAGE_FILE: &str = "local_storage.json";
/// File name of the session scope inside a data directory.
pub const SESSION_STORAGE_FILE: &str = "session_storage.json";

/// A change made through another handle of the same store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    /// Changed key; `None` when the store was cleared.
    pub key: Option<String>,
    /// Value before the change.
    pub old_value: Option<String>,
    /// Value after the change; `None` for removals.
    pub new_value: Option<String>,
}

impl StorageEvent {
    /// Whether the event concerns `key` (a clear concerns every key).
    pub fn affects(&self, key: &str) -> bool {
        self.key.as_deref().map_or(true, |k| k == key)
    }
}

/// String key/value storage backend.
///
/// Methods take `&self`; backends use interior locking so one store can be
/// shared by several controllers.
pub trait KeyValueStore: Send + Sync {
    /// Value for a key.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store a value.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a key. Deleting a missing key succeeds.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Delete every key.
    fn clear(&self) -> Result<(), StorageError>;

    /// All keys in sorted order.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}
