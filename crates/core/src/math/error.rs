//! Math error types.

use thiserror::Error;

/// Result type alias using `MathError`.
pub type MathResult<T> = Result<T, MathError>;

/// Errors raised by the numeric helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// Average requested over an empty sequence.
    #[error("Cannot calculate average of an empty list")]
    EmptyInput,

    /// An element could not be interpreted as a number.
    #[error("All elements must be numbers (element {index} is not)")]
    InvalidType {
        /// Position of the offending element.
        index: usize,
    },

    /// Percentage change from a zero base.
    #[error("Cannot calculate percentage change when old value is zero")]
    DivisionByZero,

    /// Result exceeds the decimal range.
    #[error("Arithmetic overflow")]
    Overflow,
}

impl MathError {
    /// Returns the error code for logs and diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EMPTY_INPUT",
            Self::InvalidType { .. } => "INVALID_TYPE",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::Overflow => "OVERFLOW",
        }
    }
}
