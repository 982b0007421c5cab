//! Base trait for UI state in the MVI architecture.

/// Marker trait for UI state objects.
///
/// A state value carries everything its view needs to render, compares
/// for change detection, and is replaced wholesale rather than mutated
/// in place.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
