//! octocards — a terminal card view over the public GitHub user
//! directory.
//!
//! Fetches `https://api.github.com/users` exactly once per run and
//! renders one card per user: login, avatar URL, profile link.

pub mod cancel;
pub mod config;
pub mod github;
pub mod logging;
pub mod ui;
