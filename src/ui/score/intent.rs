//! Intents for the score.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreIntent {
    /// Add one point.
    Increment,
    /// Drop the score back to zero.
    Reset,
}

impl Intent for ScoreIntent {}
