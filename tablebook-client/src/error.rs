//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// The response envelope carried a non-empty `error` field
    #[error("{0}")]
    Remote(String),

    /// HTTP request failed: network failure, non-JSON body, timeout
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ClientError {
    /// The message a UI would surface for this failure
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
