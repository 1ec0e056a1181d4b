//! Single-writer store for the search results view.
//!
//! All state changes go through [`StoryStore::dispatch`], which runs the
//! reducer under the watch channel's lock. Dispatches are therefore applied
//! one at a time in the order they are made, and every subscriber sees the
//! result.

use std::sync::Arc;

use tokio::sync::watch;

use crate::ui::mvi::Reducer;
use crate::ui::stories::{StoriesIntent, StoriesReducer, StoriesState};

#[derive(Clone)]
pub struct StoryStore {
    tx: Arc<watch::Sender<StoriesState>>,
}

impl StoryStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(StoriesState::default());
        Self { tx: Arc::new(tx) }
    }

    /// Apply `intent` to the current state.
    pub fn dispatch(&self, intent: StoriesIntent) {
        tracing::debug!(intent = intent.name(), "Dispatching");
        self.tx.send_modify(|state| {
            let current = std::mem::take(state);
            *state = StoriesReducer::reduce(current, intent);
        });
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> StoriesState {
        self.tx.borrow().clone()
    }

    /// Receiver that is notified after every dispatch.
    pub fn subscribe(&self) -> watch::Receiver<StoriesState> {
        self.tx.subscribe()
    }
}

impl Default for StoryStore {
    fn default() -> Self {
        Self::new()
    }
}
