use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use tracing::debug;

use crate::github::error::FetchError;
use crate::github::models::UserRecord;

/// The one endpoint this application reads. Fixed: no query parameters,
/// no pagination cursor, no per-run override.
pub const USERS_ENDPOINT: &str = "https://api.github.com/users";

/// Builds the preconfigured HTTP client.
///
/// GitHub rejects requests without a `User-Agent`, so both headers are
/// installed as client defaults. No auth, no timeouts: a hung connection
/// leaves the view in its loading state.
pub fn build_client() -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("octocards"));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/vnd.github.v3+json"),
    );

    Client::builder().default_headers(headers).build()
}

/// Fetches the user directory and decodes it as an ordered sequence.
///
/// Order is exactly the order of the response array. Issued once per
/// mounted view; callers must not retry or re-dispatch.
pub async fn fetch_users(client: &Client, url: &str) -> Result<Vec<UserRecord>, FetchError> {
    debug!(url, "dispatching user directory request");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Request {
            url: url.to_string(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    let users = response
        .json::<Vec<UserRecord>>()
        .await
        .map_err(|e| FetchError::Decode { source: e })?;

    debug!(count = users.len(), "user directory decoded");
    Ok(users)
}
