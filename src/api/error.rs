/// Error types for the content API
use thiserror::Error;

/// Errors that can occur while talking to the content service.
///
/// A missing record is not an error: lookups return `Ok(None)` for that case.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentError {
    /// Network-related errors (connect, timeout, TLS, body read)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("Content service returned {status}: {body}")]
    Status {
        status: u16,
        body: String,
    },

    /// The response did not have the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ContentError {
    fn from(e: reqwest::Error) -> Self {
        ContentError::Transport(e.to_string())
    }
}
