//! Custom error types for FinSmart
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for FinSmart operations
#[derive(Error, Debug)]
pub enum FinsmartError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Rejected form input (blank fields, non-numeric or negative amounts, bad dates)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A goal whose target cannot produce a progress percentage
    #[error("Invalid goal '{name}': target amount must be positive, got {target}")]
    InvalidGoal { name: String, target: Money },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FinsmartError {
    /// Create an "invalid input" error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an "invalid goal" error
    pub fn invalid_goal(name: impl Into<String>, target: Money) -> Self {
        Self::InvalidGoal {
            name: name.into(),
            target,
        }
    }

    /// Check if this is an input validation error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is an invalid goal error
    pub fn is_invalid_goal(&self) -> bool {
        matches!(self, Self::InvalidGoal { .. })
    }
}

impl From<std::io::Error> for FinsmartError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinsmartError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for FinSmart operations
pub type FinsmartResult<T> = Result<T, FinsmartError>;
