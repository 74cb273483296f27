//! API Response types
//!
//! The `{data, error}` envelope spoken on every endpoint

use serde::{Deserialize, Serialize};

/// Unified API response envelope
///
/// All API responses follow this format:
/// ```json
/// {
///     "data": { ... }
/// }
/// ```
/// or, on failure:
/// ```json
/// {
///     "error": "Reservation cannot be found."
/// }
/// ```
/// Request bodies reuse the same shape with only `data` set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response payload (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable error message (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create an envelope carrying a payload
    pub fn data(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    /// Create an envelope carrying an error message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }

    /// Decode the envelope into a discriminated result.
    ///
    /// A non-empty `error` wins regardless of any `data` sent alongside
    /// it; otherwise the payload is returned as-is (`None` when the
    /// backend sent nothing).
    pub fn into_result(self) -> Result<Option<T>, String> {
        match self.error {
            Some(message) if !message.is_empty() => Err(message),
            _ => Ok(self.data),
        }
    }
}
