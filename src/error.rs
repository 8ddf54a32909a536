//! Custom error types for finsight
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The validation variants (`InvalidAmount`,
//! `InvalidCategory`, `NoProfileSet`, `InvalidRiskTolerance`) are raised by
//! the computation engine at the point of misuse; the remaining variants
//! cover the surrounding infrastructure.

use thiserror::Error;

/// The main error type for finsight operations
#[derive(Error, Debug)]
pub enum FinsightError {
    /// Amount is negative or could not be parsed as money
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Category is empty or missing
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Investment advice was requested before a profile was set
    #[error("No investment profile set. Run 'finsight profile set <risk>' first")]
    NoProfileSet,

    /// Risk tolerance outside low/medium/high
    #[error("Invalid risk tolerance '{0}': expected low, medium, or high")]
    InvalidRiskTolerance(String),

    /// Period strings that are not YYYY-MM or have an out-of-range month
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// Date strings that are not YYYY-MM-DD
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl FinsightError {
    /// Create an `InvalidAmount` error for a negative amount
    pub fn negative_amount(amount: impl std::fmt::Display) -> Self {
        Self::InvalidAmount(format!("amount must not be negative (got {})", amount))
    }

    /// Create an `InvalidCategory` error for an empty category
    pub fn empty_category() -> Self {
        Self::InvalidCategory("category must not be empty".into())
    }

    /// Check if this error comes from input validation rather than
    /// infrastructure failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::InvalidCategory(_)
                | Self::NoProfileSet
                | Self::InvalidRiskTolerance(_)
                | Self::InvalidPeriod(_)
                | Self::InvalidDate(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for FinsightError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FinsightError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for finsight operations
pub type FinsightResult<T> = Result<T, FinsightError>;
