use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

use super::KeyValueStorage;

/// A value restored from storage at construction and written back on
/// every change.
///
/// Storage failures never reach the caller: the in-memory value is always
/// authoritative and failed writes are logged.
pub struct PersistedValue<V> {
    key: String,
    value: V,
    storage: Arc<dyn KeyValueStorage>,
}

impl<V> PersistedValue<V>
where
    V: FromStr + Display + Clone,
{
    /// Restore `key` from `storage`, falling back to `default`.
    ///
    /// Nothing is written until the first [`set`](Self::set).
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>, default: V) -> Self {
        let key = key.into();
        let value = match storage.get_item(&key) {
            Ok(Some(raw)) => match raw.parse::<V>() {
                Ok(value) => value,
                Err(_) => {
                    tracing::warn!(key = %key, "Stored value is unreadable, using default");
                    default
                }
            },
            Ok(None) => default,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to restore persisted value");
                default
            }
        };

        Self {
            key,
            value,
            storage,
        }
    }

    pub fn get(&self) -> V {
        self.value.clone()
    }

    /// Borrow the current value without cloning.
    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replace the value and persist it.
    pub fn set(&mut self, value: V) {
        self.value = value;
        if let Err(e) = self.storage.set_item(&self.key, &self.value.to_string()) {
            tracing::warn!(key = %self.key, error = %e, "Failed to persist value");
        }
    }
}
