//! Error types for code parsing and generation.

use thiserror::Error;

/// A string or digit array that does not satisfy the [`Code`](crate::Code) invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("code must have exactly {expected} digits, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("code contains non-digit character {found:?}")]
    NotADigit { found: char },

    #[error("digit {digit} appears more than once")]
    RepeatedDigit { digit: u8 },
}

/// Generation failure. Only reachable when run-scoped uniqueness is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("all {issued} possible codes have already been issued in this run")]
    CodeSpaceExhausted { issued: usize },
}

/// A `strftime` pattern chrono cannot render.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp format {pattern:?}")]
pub struct TimestampFormatError {
    pub pattern: String,
}
