//! Error types for countdown timer operations

use thiserror::Error;

/// Errors returned by the timer engine and its input parser
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimerError {
    #[error("invalid duration input {input:?}: {reason}")]
    InvalidDurationFormat { input: String, reason: String },

    #[error("countdown engine is no longer running")]
    EngineStopped,
}

impl TimerError {
    pub(crate) fn invalid_input(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidDurationFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
