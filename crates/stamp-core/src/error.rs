//! Unified error handling for Stamp Core.
//!
//! The core is almost entirely total — the only fallible boundary is
//! assignment parsing, so the error surface here is deliberately small.

use thiserror::Error;

/// Root error type for Stamp Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StampError {
    /// A `--var` argument did not contain a `=` separator.
    #[error("invalid variable '{arg}': expected KEY=VALUE")]
    InvalidAssignment { arg: String },
}

impl StampError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidAssignment { arg } => vec![
                format!("'{}' has no '=' separator", arg),
                "Write variables as KEY=VALUE, e.g. --var name=Ada".into(),
                "A value may itself contain '=': --var query=a=b".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidAssignment { .. } => ErrorCategory::Validation,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}

/// Convenient result type alias.
pub type StampResult<T> = Result<T, StampError>;
