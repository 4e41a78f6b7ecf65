use crate::ui::mvi::Intent;

use super::Control;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusIntent {
    Next,
    Previous,
    /// Focus a specific button, e.g. after it was clicked.
    Set(Control),
}

impl Intent for FocusIntent {}
