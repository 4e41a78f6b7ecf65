use crate::ui::mvi::Reducer;

use super::intent::FocusIntent;
use super::state::ControlFocus;

pub struct FocusReducer;

impl Reducer for FocusReducer {
    type State = ControlFocus;
    type Intent = FocusIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let focused = match intent {
            FocusIntent::Next => state.focused.next(),
            FocusIntent::Previous => state.focused.previous(),
            FocusIntent::Set(control) => control,
        };
        ControlFocus { focused }
    }
}
