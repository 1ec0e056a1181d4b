use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::{KeyValueStorage, StorageError};

/// Key/value store backed by a flat TOML table of strings.
///
/// Every write rewrites the whole file through a temp file + rename so a
/// crash mid-write never leaves a truncated table behind.
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// `<data_dir>/hn-search/state.toml`, or the current directory when the
    /// platform has no data dir.
    pub fn default_path() -> PathBuf {
        let data_dir = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        data_dir.join("hn-search").join("state.toml")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StorageError::Read {
            path: self.path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| StorageError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn write_table(&self, table: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let content = toml::to_string(table).map_err(|e| StorageError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let tmp_path = self.path.with_extension("toml.tmp");
        fs::write(&tmp_path, content).map_err(write_err)?;
        fs::rename(&tmp_path, &self.path).map_err(write_err)?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_table()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock();
        // An unparseable file is replaced rather than blocking every write.
        let mut table = match self.read_table() {
            Err(e @ StorageError::Parse { .. }) => {
                tracing::warn!(error = %e, "Discarding unreadable storage file");
                BTreeMap::new()
            }
            other => other?,
        };
        table.insert(key.to_string(), value.to_string());
        self.write_table(&table)
    }
}
