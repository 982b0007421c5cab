//! State for the user directory view.

use crate::github::UserRecord;
use crate::ui::mvi::UiState;

/// User directory lifecycle state machine.
///
/// One-way: `Loading` is the initial state, `Loaded` and `Failed` are
/// terminal. There is no transition back to `Loading` — the directory
/// is fetched exactly once per mounted view.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UsersState {
    /// Request dispatched, no result yet. The view shows the loading
    /// indicator and nothing else.
    #[default]
    Loading,

    /// Fetch completed; the full sequence was committed atomically and
    /// is never mutated, merged, or partially updated afterwards.
    Loaded { users: Vec<UserRecord> },

    /// Fetch failed; the reason replaces the loading indicator.
    Failed { reason: String },
}

impl UiState for UsersState {}

impl UsersState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded records, in received order. Empty for Loading/Failed.
    pub fn users(&self) -> &[UserRecord] {
        match self {
            Self::Loaded { users } => users,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_loading() {
        assert!(UsersState::default().is_loading());
    }

    #[test]
    fn loading_exposes_no_users() {
        assert!(UsersState::Loading.users().is_empty());
        let failed = UsersState::Failed {
            reason: "boom".to_string(),
        };
        assert!(failed.users().is_empty());
    }
}
