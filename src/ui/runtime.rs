use std::io;

use tracing::{info, warn};

use crate::cancel::CancelToken;
use crate::config::Config;
use crate::github::{build_client, fetch_users, USERS_ENDPOINT};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::users::UsersIntent;

pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.tick_rate();
    let mut app = App::new();
    let events = EventHandler::new(tick_rate);

    let rt = tokio::runtime::Runtime::new()?;
    let cancel = CancelToken::new();

    // Dispatched once per run. Redraws, resizes and ticks never pass
    // through here again.
    if app.begin_fetch() {
        spawn_fetch(&rt, &events, cancel.clone())
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::Users(intent)) => app.apply_users(intent),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    // Teardown: a response that races past this point is dropped by
    // the fetch task instead of dispatched at a dead view.
    cancel.cancel();
    drop(guard);
    Ok(())
}

fn spawn_fetch(
    rt: &tokio::runtime::Runtime,
    events: &EventHandler,
    cancel: CancelToken,
) -> Result<(), reqwest::Error> {
    let client = build_client()?;
    let tx = events.sender();

    rt.spawn(async move {
        let result = fetch_users(&client, USERS_ENDPOINT).await;

        if cancel.is_cancelled() {
            info!("view torn down before fetch resolved; dropping result");
            return;
        }

        let intent = match result {
            Ok(users) => UsersIntent::FetchCompleted { users },
            Err(err) => {
                warn!(error = %err, "user directory fetch failed");
                UsersIntent::FetchFailed {
                    reason: err.user_message(),
                }
            }
        };
        let _ = tx.send(AppEvent::Users(intent));
    });

    Ok(())
}
