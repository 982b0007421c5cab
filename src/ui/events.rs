use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use tracing::error;

use crate::ui::users::UsersIntent;

/// Events delivered to the main UI loop.
pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    /// Terminal dimensions changed; the next draw picks up the new
    /// size, this event only forces that draw to happen promptly.
    Resize,
    /// Outcome of the user directory fetch, already shaped as an
    /// intent for the users reducer.
    Users(UsersIntent),
    /// OS signal received (SIGTERM, SIGINT).
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            // Translate OS signals into a Shutdown event so teardown
            // always runs through the normal loop exit.
            let signal_flag = Arc::new(AtomicBool::new(false));
            let _ = signal_hook::flag::register(
                signal_hook::consts::SIGTERM,
                Arc::clone(&signal_flag),
            );
            let _ = signal_hook::flag::register(
                signal_hook::consts::SIGINT,
                Arc::clone(&signal_flag),
            );

            let mut last_tick = Instant::now();
            loop {
                if signal_flag.swap(false, Ordering::Relaxed) {
                    let _ = event_tx.send(AppEvent::Shutdown);
                }

                // Short poll so signals are noticed promptly.
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => match event::read() {
                        Ok(Event::Key(key)) => {
                            let _ = event_tx.send(AppEvent::Input(key));
                        }
                        Ok(Event::Resize(..)) => {
                            let _ = event_tx.send(AppEvent::Resize);
                        }
                        Ok(_) => {}
                        Err(err) => {
                            error!(error = %err, "terminal event read failed");
                            break;
                        }
                    },
                    Ok(false) => {
                        // Timeout — no event
                    }
                    Err(err) => {
                        error!(error = %err, "terminal event poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
