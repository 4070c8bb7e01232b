//! UI errors.

use thiserror::Error;

/// UI error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum UiError {
    #[error("I/O error,\n  caused by: {}", source)]
    Io { source: std::io::Error },

    #[error("Terminal event reader crashed,\n  caused by: {}", source)]
    EventReader { source: tokio::task::JoinError },
}

impl From<std::io::Error> for UiError {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e }
    }
}

impl From<tokio::task::JoinError> for UiError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::EventReader { source: e }
    }
}

/// Result alias for `UiError`.
pub type Result<T> = core::result::Result<T, UiError>;
