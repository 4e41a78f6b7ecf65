//! Reducer for the score.

use crate::ui::mvi::Reducer;

use super::intent::ScoreIntent;
use super::state::ScoreState;

/// Score transitions. Both are always enabled.
pub struct ScoreReducer;

impl Reducer for ScoreReducer {
    type State = ScoreState;
    type Intent = ScoreIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Saturates instead of wrapping so the count never jumps back to zero.
            ScoreIntent::Increment => ScoreState {
                value: state.value.saturating_add(1),
            },
            ScoreIntent::Reset => ScoreState { value: 0 },
        }
    }
}
