//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place a state transition happens.
///
/// `reduce` must be referentially transparent: no I/O, no clocks, no
/// randomness. Equal inputs always produce equal outputs.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
