//! Error types for the HTTP side of the client.

use thiserror::Error;

/// Result type for client construction.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors raised while building or driving the command client.
///
/// `send_command` never returns these; it folds them into a failed
/// `CommandResponse` instead.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL provided is invalid.
    #[error("invalid command router URL: {0}")]
    InvalidUrl(String),

    /// HTTP layer failed (connection, status, body).
    #[error("command router HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON encoding or decoding failed.
    #[error("failed to parse command router payload: {0}")]
    Json(#[from] serde_json::Error),
}
