//! Error types for rule loading and conversion

use thiserror::Error;

/// Errors surfaced by the core pipeline
///
/// Casing and contraction resolution never fail on valid text; the only
/// fatal condition is a missing or malformed rule table at load time.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    /// Rule table missing or malformed; fatal at load time
    #[error("rule table '{table}' failed to load: {reason}")]
    DataLoad {
        /// Identifier of the table that failed
        table: String,
        /// Parser or I/O detail
        reason: String,
    },

    /// Tokenization/tagging capability unavailable; conversions degrade
    /// to their documented defaults instead of failing
    #[error("annotation context unavailable: {0}")]
    UnsupportedContext(String),

    /// Caller-supplied text is not processable
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
