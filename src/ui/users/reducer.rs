use tracing::warn;

use crate::ui::mvi::Reducer;
use crate::ui::users::intent::UsersIntent;
use crate::ui::users::state::UsersState;

pub struct UsersReducer;

impl Reducer for UsersReducer {
    type State = UsersState;
    type Intent = UsersIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match state {
            UsersState::Loading => match intent {
                UsersIntent::FetchCompleted { users } => UsersState::Loaded { users },
                UsersIntent::FetchFailed { reason } => UsersState::Failed { reason },
            },
            // Loaded and Failed are terminal. A duplicate or late
            // completion must not overwrite the committed sequence.
            terminal => {
                warn!("ignoring fetch intent in terminal state");
                terminal
            }
        }
    }
}
