//! Error types for the API

use thiserror::Error;
use wordform_core::CoreError;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Caller-supplied text is absent or empty
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Error from the core pipeline
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
