//! Marker trait for UI state.

/// A self-contained snapshot a widget can be drawn from.
///
/// `Default` is the state the screen starts in; `PartialEq` lets callers tell
/// whether an intent changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
