//! Client error types.

use thiserror::Error;

/// Type alias for Result using [`ClientError`].
pub type Result<T> = std::result::Result<T, ClientError>;

/// Failures surfaced by the client data layer.
///
/// Payloads are plain strings so one failed fetch can be handed to every
/// caller waiting on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a response (connect, timeout, body read).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body was not the expected JSON shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The relay answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// A direct upstream source failed.
    #[error("Stock source failed: {0}")]
    Source(String),

    #[error("Request cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

impl From<stockview_core::Error> for ClientError {
    fn from(e: stockview_core::Error) -> Self {
        ClientError::Source(e.to_string())
    }
}
