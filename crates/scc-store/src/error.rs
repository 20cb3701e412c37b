//! # Storage Errors

use std::path::PathBuf;

use thiserror::Error;

/// Failures of a [`KeyValueStore`](crate::KeyValueStore) backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// A write would exceed the store's quota.
    #[error("storage quota exceeded writing \"{key}\": {needed} bytes needed, quota is {quota}")]
    QuotaExceeded {
        /// Key being written.
        key: String,
        /// Total bytes the store would hold after the write.
        needed: usize,
        /// Configured quota in bytes.
        quota: usize,
    },

    /// Reading or writing the backing file failed.
    #[error("storage I/O error at {path}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The backing file does not hold a JSON object of strings.
    #[error("storage file {path} is malformed")]
    Malformed {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
}
