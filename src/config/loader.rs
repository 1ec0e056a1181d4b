use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `<config_dir>/hn-search/config.toml` via `dirs::config_dir()`,
    /// falling back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("hn-search").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields `Config::default()`. An existing file is parsed
    /// and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The endpoint is an http(s) URL prefix
    /// - The storage key is not empty
    /// - Both timeouts are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = &self.search.endpoint;
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("Search endpoint '{}' must be an http(s) URL", endpoint),
            });
        }

        if self.search.storage_key.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "Storage key must not be empty".to_string(),
            });
        }

        if self.http.timeout_seconds == 0 || self.http.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "HTTP timeouts must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Where the search term is persisted.
    pub fn storage_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(crate::storage::FileStorage::default_path)
    }
}
