//! Intents for the user directory view.

use crate::github::UserRecord;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the user directory reducer.
///
/// Both come from the single fetch task; there are no user-driven
/// transitions in this state machine.
#[derive(Debug, Clone)]
pub enum UsersIntent {
    /// The fetch resolved with the full ordered sequence.
    FetchCompleted { users: Vec<UserRecord> },

    /// The fetch failed (connect error, non-2xx status, bad body).
    FetchFailed { reason: String },
}

impl Intent for UsersIntent {}
