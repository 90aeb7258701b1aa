//! Custom error types for FINA
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for FINA operations
#[derive(Error, Debug)]
pub enum FinaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A non-positive or negative amount where a positive one is required
    #[error("Invalid amount: {amount} ({reason})")]
    InvalidAmount { amount: Money, reason: &'static str },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Failures reported by the external advice provider
    #[error("Advisor error: {0}")]
    Advisor(String),
}

impl FinaError {
    /// Create an invalid-amount error for a rejected contribution
    pub fn non_positive_amount(amount: Money) -> Self {
        Self::InvalidAmount {
            amount,
            reason: "must be greater than zero",
        }
    }

    /// Create an invalid-amount error for a negative transaction amount
    pub fn negative_amount(amount: Money) -> Self {
        Self::InvalidAmount {
            amount,
            reason: "must not be negative",
        }
    }

    /// Create a "not found" error for goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Goal",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an invalid-amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FinaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for FINA operations
pub type FinaResult<T> = Result<T, FinaError>;
