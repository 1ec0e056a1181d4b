//! The surface a presentation layer is allowed to use.
//!
//! A view reads [`SearchSession::view`] and calls the `on_*` methods; it
//! never writes results or the search term directly.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::{Config, SearchSettings};
use crate::fetch::{FetchController, HttpStorySource, RequestTarget, StorySource};
use crate::search::SearchController;
use crate::storage::{FileStorage, KeyValueStorage};
use crate::store::StoryStore;
use crate::story::StoryId;
use crate::ui::stories::{StoriesIntent, StoriesState};

pub struct SearchSession {
    store: StoryStore,
    search: SearchController,
}

impl SearchSession {
    /// Wire the store, fetcher and search controller together and start
    /// the initial fetch.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(
        settings: SearchSettings,
        storage: Arc<dyn KeyValueStorage>,
        source: Arc<dyn StorySource>,
    ) -> Self {
        let store = StoryStore::new();
        let fetch = FetchController::new(source, store.clone());
        let search = SearchController::new(settings, storage, fetch);
        Self { store, search }
    }

    /// Production wiring: file-backed term storage and the HTTP source.
    pub fn from_config(config: &Config) -> Self {
        let storage = FileStorage::new(config.storage_path());
        tracing::debug!(path = %storage.path().display(), "Using term storage");
        Self::new(
            config.search.clone(),
            Arc::new(storage),
            Arc::new(HttpStorySource::new(&config.http)),
        )
    }

    pub fn view(&self) -> StoriesState {
        self.store.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<StoriesState> {
        self.store.subscribe()
    }

    pub fn search_term(&self) -> &str {
        self.search.search_term()
    }

    pub fn request_target(&self) -> Option<RequestTarget> {
        self.search.request_target()
    }

    pub fn on_term_changed(&mut self, term: impl Into<String>) {
        self.search.on_term_changed(term);
    }

    pub fn on_submit(&self) -> Option<JoinHandle<()>> {
        self.search.on_submit()
    }

    /// Drop one story from the current view. No network involved.
    pub fn on_remove(&self, id: StoryId) {
        self.store.dispatch(StoriesIntent::ItemRemoved { id });
    }
}
