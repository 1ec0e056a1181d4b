//! Marker trait for view state.

/// Snapshot handed to the view.
///
/// `Default` is the initial state, `Clone` lets the store hand out
/// snapshots, and `PartialEq` lets tests compare whole states.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
