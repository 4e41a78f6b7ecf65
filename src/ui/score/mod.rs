//! Score feature module.
//!
//! Holds the one number the application exists to show.
//!
//! # Architecture
//!
//! - `state.rs` - `ScoreState`, the counter value
//! - `intent.rs` - the two user actions (Increment, Reset)
//! - `reducer.rs` - pure transitions
//! - `controller.rs` - owns the state and keeps the display label in sync

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::ScoreController;
pub use intent::ScoreIntent;
pub use reducer::ScoreReducer;
pub use state::ScoreState;
