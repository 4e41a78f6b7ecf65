//! Marker trait for intents.

/// An action the screen can apply to some piece of state.
///
/// Intents are plain data: the input layer builds them from key presses and
/// mouse clicks, and a [`Reducer`](super::Reducer) consumes them.
pub trait Intent: Send + 'static {}
