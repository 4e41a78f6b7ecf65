//! Model-View-Intent (MVI) primitives for the scoreboard screen.
//!
//! Every change to what the screen shows flows in one direction:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────── key/mouse ───────┘
//! ```
//!
//! - **State**: a value snapshot holding everything a widget needs to draw
//! - **Intent**: a user action (button press, key) turned into data
//! - **Reducer**: the pure function applying an intent to a state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
