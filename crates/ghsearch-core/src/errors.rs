//! Logic errors.

use thiserror::Error;

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`ghsearch_ghapi_interface::ApiError`].
    #[error("Search failed: {source}")]
    ApiError {
        source: ghsearch_ghapi_interface::ApiError,
    },
}

impl From<ghsearch_ghapi_interface::ApiError> for DomainError {
    fn from(e: ghsearch_ghapi_interface::ApiError) -> Self {
        Self::ApiError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
