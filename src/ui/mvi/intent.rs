//! Base trait for intents in the MVI architecture.

/// Marker trait for intent objects.
///
/// An intent is anything that may move a state machine forward: a key
/// press, a completed network call, a timer. Intents only ever reach
/// state through a reducer.
pub trait Intent: Send + 'static {}
