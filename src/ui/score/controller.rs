//! Counter display controller.

use crate::ui::mvi::Reducer;

use super::intent::ScoreIntent;
use super::reducer::ScoreReducer;
use super::state::ScoreState;

/// Owns the score and the label drawn for it.
///
/// Every mutation goes through [`ScoreReducer`] and is followed by a
/// re-render, so `label()` always equals the decimal form of `value()`.
#[derive(Debug, Clone)]
pub struct ScoreController {
    state: ScoreState,
    label: String,
}

impl Default for ScoreController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreController {
    pub fn new() -> Self {
        let mut controller = Self {
            state: ScoreState::default(),
            label: String::new(),
        };
        controller.render();
        controller
    }

    pub fn increment(&mut self) {
        self.dispatch(ScoreIntent::Increment);
    }

    pub fn reset(&mut self) {
        self.dispatch(ScoreIntent::Reset);
    }

    /// Apply an intent and refresh the label.
    pub fn dispatch(&mut self, intent: ScoreIntent) {
        self.state = ScoreReducer::reduce(self.state, intent);
        self.render();
    }

    pub fn value(&self) -> u64 {
        self.state.value
    }

    pub fn state(&self) -> ScoreState {
        self.state
    }

    /// Text currently shown in the score card.
    pub fn label(&self) -> &str {
        &self.label
    }

    fn render(&mut self) {
        self.label = self.state.display_text();
    }
}
