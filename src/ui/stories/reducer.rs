//! Request lifecycle reducer for the search results view.

use crate::ui::mvi::Reducer;

use super::intent::StoriesIntent;
use super::state::StoriesState;

/// Folds fetch lifecycle and removal events into [`StoriesState`].
pub struct StoriesReducer;

impl Reducer for StoriesReducer {
    type State = StoriesState;
    type Intent = StoriesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            StoriesIntent::FetchStarted => StoriesState {
                is_loading: true,
                is_error: false,
                ..state
            },

            // Results are replaced wholesale, never merged.
            StoriesIntent::FetchSucceeded { stories } => StoriesState {
                items: stories,
                is_loading: false,
                is_error: false,
            },

            // Keep the last good page on screen under the error indicator.
            StoriesIntent::FetchFailed => StoriesState {
                is_loading: false,
                is_error: true,
                ..state
            },

            StoriesIntent::ItemRemoved { id } => {
                let StoriesState {
                    mut items,
                    is_loading,
                    is_error,
                } = state;
                items.retain(|story| story.id != id);
                StoriesState {
                    items,
                    is_loading,
                    is_error,
                }
            }
        }
    }
}
