use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::store::StoryStore;
use crate::ui::stories::StoriesIntent;

use super::source::StorySource;
use super::target::RequestTarget;

/// Runs one fetch cycle per [`trigger`](Self::trigger) and reports it to
/// the store.
///
/// In-flight requests are never cancelled. When two overlap, whichever
/// resolves last determines the items on screen.
#[derive(Clone)]
pub struct FetchController {
    source: Arc<dyn StorySource>,
    store: StoryStore,
}

impl FetchController {
    pub fn new(source: Arc<dyn StorySource>, store: StoryStore) -> Self {
        Self { source, store }
    }

    /// Start a fetch against `target`.
    ///
    /// `FetchStarted` is dispatched before this returns; the request itself
    /// runs on a spawned task. Dropping the handle does not cancel it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn trigger(&self, target: RequestTarget) -> JoinHandle<()> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("fetch", %request_id, url = %target);

        self.store.dispatch(StoriesIntent::FetchStarted);

        let source = Arc::clone(&self.source);
        let store = self.store.clone();
        tokio::spawn(
            async move {
                tracing::debug!("Request issued");
                match source.search(&target).await {
                    Ok(stories) => {
                        tracing::info!(count = stories.len(), "Search succeeded");
                        store.dispatch(StoriesIntent::FetchSucceeded { stories });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Search failed");
                        store.dispatch(StoriesIntent::FetchFailed);
                    }
                }
            }
            .instrument(span),
        )
    }
}
