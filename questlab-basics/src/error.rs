//! Error types shared by the fundamentals modules.

use crate::InputError;
use thiserror::Error;

/// Result type for fundamentals operations.
pub type BasicsResult<T> = Result<T, BasicsError>;

/// Errors that can occur in the fundamentals demos.
#[derive(Debug, Error)]
pub enum BasicsError {
    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A user-supplied value could not be used.
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("division by zero")]
    DivisionByZero,

    /// The result does not fit, e.g. `i64::MIN / -1`.
    #[error("arithmetic overflow")]
    Overflow,

    /// A line of a key/value save file could not be read.
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },

    /// Keys must be non-empty and made of letters, digits, `_`, `-` or `.`.
    #[error("invalid save key: {0:?}")]
    InvalidKey(String),

    /// NaN and infinities have no portable text form.
    #[error("value of {0:?} is not a finite number")]
    NonFiniteFloat(String),

    /// A timestamp string did not match the expected format.
    #[error("invalid timestamp {input:?}: {source}")]
    Timestamp {
        input: String,
        source: chrono::ParseError,
    },
}
