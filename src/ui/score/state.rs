//! State for the score.

use crate::ui::mvi::UiState;

/// The score counter.
///
/// Unsigned, so it can never go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreState {
    pub value: u64,
}

impl UiState for ScoreState {}

impl ScoreState {
    /// Decimal text shown on screen for this score.
    pub fn display_text(&self) -> String {
        self.value.to_string()
    }
}
