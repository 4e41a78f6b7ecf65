use crate::ui::mvi::UiState;

use super::Control;

/// Which button Enter/Space will activate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlFocus {
    pub focused: Control,
}

impl UiState for ControlFocus {}

impl ControlFocus {
    pub fn is_focused(&self, control: Control) -> bool {
        self.focused == control
    }
}
