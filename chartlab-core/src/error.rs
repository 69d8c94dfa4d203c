//! Structured error type for sequence operations.
//!
//! Only usage errors surface as `Err`. Data insufficiency (period longer than
//! history, empty input, undefined ratio) never raises — windowed transforms
//! encode it as NaN (or false, in the boolean domain) in the output instead.

use thiserror::Error;

/// Usage errors surfaced to the caller. Fatal to the invocation only.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SeriesError {
    #[error("sequence length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, SeriesError>;
