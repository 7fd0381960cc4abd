//! Error types for buffer and slice operations.
//!
//! Every failure here is a local validation error: synchronous, not
//! retryable, and surfaced to the script caller with the offending value
//! and the bound it violated.

use thiserror::Error;

/// Result type for buffer operations.
pub type BufferResult<T> = Result<T, BufferError>;

/// Script-level classification of a [`BufferError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Index or range outside the valid bounds.
    Range,
    /// Value has the wrong shape for the operation.
    Type,
    /// Unrecognized property name on a slice.
    Lookup,
}

/// Errors raised by buffer, slice, and coercion operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("index too low: {index} < 0")]
    IndexTooLow { index: i64 },

    #[error("index too high: {index} >= {len}")]
    IndexTooHigh { index: i64, len: usize },

    #[error("start index too low: {start} on length {len}")]
    StartTooLow { start: i64, len: usize },

    #[error("end index too low: {end} on length {len}")]
    EndTooLow { end: i64, len: usize },

    #[error("end before start: {end} < {start}")]
    EndBeforeStart { start: i64, end: i64 },

    #[error("end index too high: {end} >= {len}")]
    EndTooHigh { end: i64, len: usize },

    #[error("write out of bounds: offset {offset} + len {len} > capacity {cap}")]
    OutOfBounds {
        offset: usize,
        len: usize,
        cap: usize,
    },

    #[error("not a recognized buffer-like value: {type_name}")]
    NotBufferLike { type_name: String },

    #[error("slice source is neither a buffer nor a slice")]
    NotSliceable,

    #[error("no property called {name}")]
    UnknownProperty { name: String },
}

impl BufferError {
    /// The script-level exception class this error maps to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BufferError::IndexTooLow { .. }
            | BufferError::IndexTooHigh { .. }
            | BufferError::StartTooLow { .. }
            | BufferError::EndTooLow { .. }
            | BufferError::EndBeforeStart { .. }
            | BufferError::EndTooHigh { .. }
            | BufferError::OutOfBounds { .. } => ErrorKind::Range,
            BufferError::NotBufferLike { .. } | BufferError::NotSliceable => ErrorKind::Type,
            BufferError::UnknownProperty { .. } => ErrorKind::Lookup,
        }
    }
}
