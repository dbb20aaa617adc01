//! Error types for assertion checks and render configuration.
//!
//! The recorder itself has no failure modes; these only surface from the
//! collaborators built on top of it.

use thiserror::Error;

/// Outcome of a failed assertion check.
#[derive(Debug, Error)]
pub enum AssertionError {
    /// The truth expression evaluated to `false`.
    #[error("assertion failed:\n\n{diagnostic}")]
    Failed { diagnostic: String },

    /// The truth expression failed before producing a value. The diagnostic
    /// shows whatever was recorded up to that point.
    #[error("assertion could not be evaluated: {message}\n\n{diagnostic}")]
    Evaluation { message: String, diagnostic: String },
}

impl AssertionError {
    /// The rendered value trace.
    pub fn diagnostic(&self) -> &str {
        match self {
            AssertionError::Failed { diagnostic } => diagnostic,
            AssertionError::Evaluation { diagnostic, .. } => diagnostic,
        }
    }
}

/// Errors loading a [`RenderConfig`](crate::RenderConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

/// Result type for assertion checks.
pub type TraceResult<T> = Result<T, AssertionError>;
