//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Applies intents to a state.
///
/// Reducers are the only place a state changes. `reduce` takes the old state
/// by value and returns the next one; it performs no I/O and never fails.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
