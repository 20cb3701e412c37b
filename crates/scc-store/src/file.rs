//! # File Store
//!
//! A [`KeyValueStore`] persisted as one JSON object of string values. The
//! file is read once on open; every mutation rewrites it through a temporary
//! sibling file and a rename, so readers never observe a partial write.
//! A missing file opens as an empty store.
//! [`FileStore::open_or_empty`] also opens an unreadable or malformed file
//! as empty; the next successful write replaces it.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::{KeyValueStore, StorageError};

/// JSON-file-backed storage.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    data: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file exists but cannot be read and
    /// [`StorageError::Malformed`] if it is not a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|source| StorageError::Malformed {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StorageError::Io { path, source }),
        };
        tracing::debug!(path = %path.display(), keys = data.len(), "opened file store");
        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    /// Open the store at `path`, starting empty when the file cannot be
    /// read or parsed. The failure is logged.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(path.clone()) {
            Ok(store) => store,
            Err(e) => {
                tracing::error!(error = &e as &dyn std::error::Error, "discarding unreadable storage file");
                Self {
                    path,
                    data: RwLock::new(BTreeMap::new()),
                }
            }
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut BTreeMap<String, String>) -> R) -> Result<R, StorageError> {
        let mut data = self.data.write();
        let mut next = data.clone();
        let result = f(&mut next);
        let bytes = serde_json::to_vec_pretty(&next).map_err(|source| StorageError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        write_atomic(&self.path, &bytes)?;
        *data = next;
        Ok(result)
    }
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError {
    let path = path.to_path_buf();
    move |source| StorageError::Io { path, source }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err(parent))?;
    }
    let tmp = path.with_extension(format!("tmp-{}", std::process::id()));
    fs::write(&tmp, bytes).map_err(io_err(&tmp))?;
    fs::rename(&tmp, path).map_err(io_err(path))
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.mutate(|data| {
            data.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        if !self.data.read().contains_key(key) {
            return Ok(());
        }
        self.mutate(|data| {
            data.remove(key);
        })
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.mutate(BTreeMap::clear)
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.data.read().keys().cloned().collect())
    }
}
