use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::fetch::DEFAULT_ENDPOINT;

/// Term searched for when nothing has been stored yet.
pub const DEFAULT_TERM: &str = "React";

/// Storage key the search term is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "search";

/// Root configuration container. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchSettings,
    pub http: HttpSettings,
    pub storage: StorageSettings,
}

/// What a submit does with an empty search term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyTermPolicy {
    /// Request the endpoint with an empty query.
    #[default]
    Fetch,
    /// Leave the request target and the results untouched.
    Skip,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Endpoint prefix; the encoded term is appended to it.
    pub endpoint: String,
    pub default_term: String,
    pub storage_key: String,
    pub empty_term: EmptyTermPolicy,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_term: DEFAULT_TERM.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            empty_term: EmptyTermPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Total request timeout in seconds.
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            connect_timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Overrides the platform data directory location.
    pub path: Option<PathBuf>,
}
