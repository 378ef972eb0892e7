//! Sink error types

use thiserror::Error;

/// Errors returned by a [`Sink`](crate::Sink)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// Request could not be delivered
    #[error("transport error: {0}")]
    Transport(String),

    /// Store answered with a non-success status
    #[error("write rejected with status {status}: {body}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response body, as far as it could be read
        body: String,
    },

    /// Request could not be encoded
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Sink refuses all writes
    #[error("sink unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for SinkError {
    fn from(e: serde_json::Error) -> Self {
        SinkError::Serialization(e.to_string())
    }
}

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;
