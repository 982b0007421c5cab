//! GitHub user directory client.
//!
//! One endpoint, one read: `GET https://api.github.com/users`. The
//! response is a JSON array of user objects; everything beyond the
//! four fields the cards render is ignored.

mod client;
mod error;
mod models;

pub use client::{build_client, fetch_users, USERS_ENDPOINT};
pub use error::FetchError;
pub use models::UserRecord;
