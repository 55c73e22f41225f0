//! Client Error Types

use thiserror::Error;

/// Client-specific result type alias
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors surfaced by the API client and local mirrors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, timeout)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A mutation is already in flight; the caller must wait
    #[error("Another operation is already in progress")]
    MutationInFlight,

    /// Persisted session could not be read or written
    #[error("Session storage error: {0}")]
    Session(#[from] std::io::Error),
}

impl ClientError {
    /// Status code of an API error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
