//! Error types for fods-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fods-core
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Column index outside the one-letter range (1..=26)
    #[error("Column index {0} out of range (expected 1..={})", crate::MAX_COLUMN)]
    ColumnOutOfRange(u32),

    /// Row index below 1
    #[error("Row index {0} out of range (minimal value is 1)")]
    RowOutOfRange(u32),

    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
