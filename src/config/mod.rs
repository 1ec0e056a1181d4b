//! Configuration loaded from `~/.config/hn-search/config.toml`.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    Config, EmptyTermPolicy, HttpSettings, SearchSettings, StorageSettings, DEFAULT_STORAGE_KEY,
    DEFAULT_TERM,
};
