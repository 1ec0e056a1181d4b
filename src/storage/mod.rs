//! Durable key/value storage and the persisted cell built on it.
//!
//! Storage is an injected capability: production code uses
//! [`FileStorage`], tests substitute [`MemoryStorage`].

mod file;
mod memory;
mod persisted;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use persisted::PersistedValue;

/// Errors raised by a storage backend.
///
/// [`PersistedValue`] logs these and carries on; they never reach the
/// presentation layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read storage file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write storage file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse storage file '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Scoped string key/value store.
pub trait KeyValueStorage: Send + Sync {
    /// Returns `None` when nothing was ever stored under `key`.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Durably stores `value` under `key` before returning.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
