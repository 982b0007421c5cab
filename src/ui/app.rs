use crate::ui::mvi::Reducer;
use crate::ui::users::{UsersIntent, UsersReducer, UsersState};

/// Frames of the loading indicator, advanced once per tick.
const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// User directory state (MVI pattern).
    users: UsersState,
    /// Guard ensuring the fetch is dispatched at most once per run.
    fetch_dispatched: bool,
    selected: usize,
    spinner_frame: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            users: UsersState::default(),
            fetch_dispatched: false,
            selected: 0,
            spinner_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Claims the single fetch slot. Returns true only on the first
    /// call; the runtime spawns the fetch task iff this returns true,
    /// so redraws and resizes can never trigger a second request.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch_dispatched {
            return false;
        }
        self.fetch_dispatched = true;
        true
    }

    pub fn users(&self) -> &UsersState {
        &self.users
    }

    /// Routes a fetch outcome through the reducer.
    pub fn apply_users(&mut self, intent: UsersIntent) {
        dispatch_mvi!(self, users, UsersReducer, intent);
        let len = self.users.users().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn on_tick(&mut self) {
        if self.users.is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Moves the card selection, clamped to the loaded sequence.
    pub fn move_selection(&mut self, delta: isize) {
        let len = self.users.users().len();
        if len == 0 {
            return;
        }
        let max = len - 1;
        let next = self.selected as isize + delta;
        self.selected = next.clamp(0, max as isize) as usize;
    }

    /// Profile URL of the selected card, if any is loaded.
    pub fn selected_profile_url(&self) -> Option<&str> {
        self.users
            .users()
            .get(self.selected)
            .map(|u| u.html_url.as_str())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
