//! Custom error types for fintrack
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum FintrackError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Missing or malformed input (calculator parameters, record fields)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Inputs were individually valid but their combination has no real solution
    #[error("No real solution: {0}")]
    DomainUndefined(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// No user id available from the identity context
    #[error("No user id available; pass --user or set FINTRACK_USER")]
    MissingUser,

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FintrackError {
    /// Create a "not found" error for goals
    pub fn goal_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Goal",
            identifier: identifier.into(),
        }
    }

    /// Create a "duplicate" error for a budget's (category, period) pair
    pub fn duplicate_budget(category: &str, period: impl std::fmt::Display) -> Self {
        Self::Duplicate {
            entity_type: "Budget",
            identifier: format!("{} for {}", category, period),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error (malformed input or duplicate record)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Duplicate { .. })
    }

    /// Check if this is a domain error from a solver
    pub fn is_domain_undefined(&self) -> bool {
        matches!(self, Self::DomainUndefined(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FintrackError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FintrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type FintrackResult<T> = Result<T, FintrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FintrackError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = FintrackError::goal_not_found("goal-1234");
        assert_eq!(err.to_string(), "Goal not found: goal-1234");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_duplicate_budget_counts_as_validation() {
        let err = FintrackError::duplicate_budget("Food", "2024-03");
        assert_eq!(err.to_string(), "Budget already exists: Food for 2024-03");
        assert!(err.is_validation());
        assert!(!err.is_domain_undefined());
    }

    #[test]
    fn test_domain_error_is_distinct() {
        let err = FintrackError::DomainUndefined("log of -0.5".into());
        assert!(err.is_domain_undefined());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FintrackError = io_err.into();
        assert!(matches!(err, FintrackError::Io(_)));
    }
}
