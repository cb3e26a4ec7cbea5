// Copyright 2025 Cowboy AI, LLC.

//! Error types shared by the demonstration modules

use thiserror::Error;

/// Errors that can surface from the demonstration functions
#[derive(Debug, Clone, Error)]
pub enum PrimerError {
    /// A value that was required to be present was absent
    #[error("missing value: {0}")]
    MissingValue(String),

    /// An asynchronous task failed or was cancelled before producing a value
    #[error("task failed: {0}")]
    TaskFailed(String),

    /// A blocking retrieval gave up waiting
    #[error("timed out waiting for a value")]
    Timeout,

    /// An element or argument was rejected by a fallible step
    #[error("invalid operation: {reason}")]
    InvalidOperation {
        /// Reason why the operation is invalid
        reason: String,
    },

    /// A date/time could not be constructed or adjusted
    #[error("invalid date/time: {0}")]
    InvalidDateTime(String),

    /// A date/time string did not match the expected format
    #[error("date/time parse error: {0}")]
    DateTimeParse(#[from] chrono::ParseError),

    /// A numeric string did not parse
    #[error("integer parse error: {0}")]
    IntParse(#[from] std::num::ParseIntError),
}

/// Result type for the demonstration functions
pub type PrimerResult<T> = Result<T, PrimerError>;

impl From<tokio::task::JoinError> for PrimerError {
    fn from(err: tokio::task::JoinError) -> Self {
        PrimerError::TaskFailed(err.to_string())
    }
}

impl From<tokio::time::error::Elapsed> for PrimerError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        PrimerError::Timeout
    }
}

impl From<futures::channel::oneshot::Canceled> for PrimerError {
    fn from(_: futures::channel::oneshot::Canceled) -> Self {
        PrimerError::TaskFailed("worker dropped the result channel".to_string())
    }
}

impl PrimerError {
    /// Create a missing-value error
    pub fn missing(what: impl Into<String>) -> Self {
        PrimerError::MissingValue(what.into())
    }

    /// Create an invalid date/time error
    pub fn invalid_datetime(what: impl Into<String>) -> Self {
        PrimerError::InvalidDateTime(what.into())
    }
}
