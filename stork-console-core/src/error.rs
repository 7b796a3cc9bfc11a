//! Unified error type definition

use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// Display index outside `1..=len`
    #[error("Index {index} is out of range (1-{len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Operator input that is not a display index at all
    #[error("Not a valid number: {0:?}")]
    InvalidIndex(String),

    /// Rejected operator input (empty field, bad proxy scheme, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed persisted line
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Storage layer error
    #[error("Storage error: {0}")]
    Storage(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Hand-off to the external runner failed
    #[error("Runner error: {0}")]
    Runner(String),
}

impl CoreError {
    /// Whether the error was caused by operator input, used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::IndexOutOfRange { .. }
            | Self::InvalidIndex(_)
            | Self::Validation(_)
            | Self::Parse { .. } => true,
            Self::Storage(_) | Self::Serialization(_) | Self::Runner(_) => false,
        }
    }

    pub(crate) fn storage(context: &str, err: &std::io::Error) -> Self {
        Self::Storage(format!("{context}: {err}"))
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
