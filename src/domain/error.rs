//! Domain error types for Pantry.
//!
//! Network failures are carried through the store as values, so every variant
//! is `Clone` and renders to the message shown to the user.

use thiserror::Error;

/// Failure of a single request against the remote document store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The request never produced an HTTP response (DNS, connect, reset, timeout).
    #[error("Network request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not JSON, or not the JSON we expected.
    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl RequestError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RequestError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Decode(err.to_string())
    }
}
