//! Unified error types for the preparation engine.

use std::path::PathBuf;

/// Main error type for preparation operations.
///
/// Only configuration-class errors are fatal to a run; per-token and
/// per-sentence conditions are recovered locally by the components and
/// never surface as `PrepError`.
#[derive(Debug, thiserror::Error)]
pub enum PrepError {
    /// Invalid configuration (malformed rule row, bad pattern, ...).
    #[error("configuration error: {0}")]
    Config(String),

    /// A rule table file could not be loaded.
    #[error("rule table load failed for {path}: {reason}")]
    RuleLoad { path: PathBuf, reason: String },

    /// An unknown language id or label was supplied.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// Invalid input provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with PrepError.
pub type PrepResult<T> = Result<T, PrepError>;

impl PrepError {
    /// Create a configuration error with message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a rule-load error for a file.
    pub fn rule_load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::RuleLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid input error with message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
