//! On-screen buttons and keyboard focus between them.
//!
//! Uses the same MVI split as the score:
//! - `state.rs` - which button holds focus
//! - `intent.rs` - focus movement
//! - `reducer.rs` - focus transitions

mod intent;
mod reducer;
mod state;

pub use intent::FocusIntent;
pub use reducer::FocusReducer;
pub use state::ControlFocus;

use crate::ui::score::ScoreIntent;

/// The two actionable buttons, in on-screen order (left to right).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    #[default]
    AddPoint,
    Reset,
}

impl Control {
    pub const ALL: [Control; 2] = [Control::AddPoint, Control::Reset];

    pub fn label(self) -> &'static str {
        match self {
            Control::AddPoint => "Add Point",
            Control::Reset => "Reset",
        }
    }

    /// Score action dispatched when the button is activated.
    pub fn intent(self) -> ScoreIntent {
        match self {
            Control::AddPoint => ScoreIntent::Increment,
            Control::Reset => ScoreIntent::Reset,
        }
    }

    fn index(self) -> usize {
        match self {
            Control::AddPoint => 0,
            Control::Reset => 1,
        }
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
