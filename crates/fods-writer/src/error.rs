//! FODS error types

use thiserror::Error;

/// Result type for FODS operations
pub type FodsResult<T> = std::result::Result<T, FodsError>;

/// Errors that can occur while building or writing a document
#[derive(Debug, Error)]
pub enum FodsError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core error (address out of range)
    #[error("Core error: {0}")]
    Core(#[from] fods_core::Error),
}
