//! API errors.

use thiserror::Error;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP call failed: network error, non-2xx status or malformed body.
    #[error("{message}")]
    RequestFailure { message: String },
}

impl ApiError {
    /// Build a request failure from any message.
    pub fn request_failure<T: Into<String>>(message: T) -> Self {
        Self::RequestFailure {
            message: message.into(),
        }
    }
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
