use crate::story::{Story, StoryId};
use crate::ui::mvi::Intent;

/// Events folded into [`StoriesState`](super::StoriesState).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoriesIntent {
    /// A request was issued. Emitted before any network I/O.
    FetchStarted,

    /// The request resolved with a page of results.
    FetchSucceeded { stories: Vec<Story> },

    /// Transport error, non-2xx status or malformed body.
    FetchFailed,

    /// The user dismissed one story from the current view.
    ItemRemoved { id: StoryId },
}

impl Intent for StoriesIntent {}

impl StoriesIntent {
    /// Short name for logs; payloads can be large.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FetchStarted => "fetch_started",
            Self::FetchSucceeded { .. } => "fetch_succeeded",
            Self::FetchFailed => "fetch_failed",
            Self::ItemRemoved { .. } => "item_removed",
        }
    }
}
