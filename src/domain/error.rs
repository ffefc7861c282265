use std::io;

use thiserror::Error;

/// Library-wide error type for reelkit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Input rejected before any boundary call was made.
    #[error("{0}")]
    Validation(String),

    /// The text-generation boundary call failed (transport, status code, or
    /// a response without usable text). Callers see one category.
    #[error("{0}")]
    Generation(String),

    /// System clipboard access failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Submitted email is not on the purchaser allow-list.
    #[error("Invalid email. Please check for typos or purchase the bundle to gain access.")]
    AccessDenied,
}

impl AppError {
    pub(crate) fn config<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
