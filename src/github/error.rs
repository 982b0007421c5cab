use thiserror::Error;

/// Errors that can occur while fetching the user directory.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, ...).
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("GitHub API error ({status})")]
    Status { status: u16 },

    /// The response body was not a JSON array of user objects.
    #[error("Failed to decode user list: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Short message suitable for the failure banner.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Request { .. } => "Could not reach GitHub".to_string(),
            FetchError::Status { status } => format!("GitHub responded with status {status}"),
            FetchError::Decode { .. } => "GitHub sent an unreadable response".to_string(),
        }
    }
}
