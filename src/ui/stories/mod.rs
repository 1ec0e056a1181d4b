//! Search results view model.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - result list and request lifecycle flags
//! - `intent.rs` - fetch lifecycle and removal events
//! - `reducer.rs` - state transitions

mod intent;
mod reducer;
mod state;

pub use intent::StoriesIntent;
pub use reducer::StoriesReducer;
pub use state::StoriesState;
