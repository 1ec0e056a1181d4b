use crate::story::Story;
use crate::ui::mvi::UiState;

/// Result list plus the request lifecycle flags.
///
/// Fields are only written by [`StoriesReducer`](super::StoriesReducer);
/// `is_loading` and `is_error` are never both set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoriesState {
    pub(super) items: Vec<Story>,
    pub(super) is_loading: bool,
    pub(super) is_error: bool,
}

impl UiState for StoriesState {}

impl StoriesState {
    /// Stories in server response order.
    pub fn items(&self) -> &[Story] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Story> {
        self.items.get(index)
    }
}
