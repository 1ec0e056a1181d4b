//! Model-View-Intent primitives shared by every stateful view.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Network outcomes and user removals both arrive as intents; the view
//! only ever reads the state the reducer hands back.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
