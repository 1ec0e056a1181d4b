//! Search term handling and the submit path.
//!
//! Typing only updates the persisted term. On submit the request target is
//! rebuilt, published on a watch channel for observers, and handed to the
//! fetch controller. Keystrokes therefore never hit the network.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::{EmptyTermPolicy, SearchSettings};
use crate::fetch::{FetchController, RequestTarget};
use crate::storage::{KeyValueStorage, PersistedValue};

pub struct SearchController {
    term: PersistedValue<String>,
    settings: SearchSettings,
    target: watch::Sender<Option<RequestTarget>>,
    fetch: FetchController,
}

impl SearchController {
    /// Restore the stored term and run the initial fetch for it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(
        settings: SearchSettings,
        storage: Arc<dyn KeyValueStorage>,
        fetch: FetchController,
    ) -> Self {
        let term = PersistedValue::new(
            storage,
            settings.storage_key.clone(),
            settings.default_term.clone(),
        );
        let (target, _rx) = watch::channel(None);

        let controller = Self {
            term,
            settings,
            target,
            fetch,
        };
        // Initial load; the handle is not needed, the store reports the outcome.
        let _ = controller.on_submit();
        controller
    }

    pub fn search_term(&self) -> &str {
        self.term.value()
    }

    /// Record a new term without touching the network.
    pub fn on_term_changed(&mut self, term: impl Into<String>) {
        self.term.set(term.into());
    }

    /// Rebuild the request target from the current term and fetch it.
    ///
    /// Returns `None` when the empty-term policy skips the request. An
    /// unchanged term is fetched again; that is how a failed search is
    /// retried.
    pub fn on_submit(&self) -> Option<JoinHandle<()>> {
        let term = self.term.value();
        if term.is_empty() && self.settings.empty_term == EmptyTermPolicy::Skip {
            tracing::debug!("Empty search term, skipping fetch");
            return None;
        }

        let target = RequestTarget::compose(&self.settings.endpoint, term);
        Some(self.publish(target))
    }

    /// Last submitted target, if any submit has produced one.
    pub fn request_target(&self) -> Option<RequestTarget> {
        self.target.borrow().clone()
    }

    /// Receiver notified each time a new target is published.
    pub fn subscribe_target(&self) -> watch::Receiver<Option<RequestTarget>> {
        self.target.subscribe()
    }

    fn publish(&self, target: RequestTarget) -> JoinHandle<()> {
        tracing::info!(url = %target, "Submitting search");
        self.target.send_replace(Some(target.clone()));
        self.fetch.trigger(target)
    }
}
