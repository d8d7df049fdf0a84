//! # Error Types
//!
//! Domain-specific error types for rewards-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rewards-core errors (this file)                                       │
//! │  ├── CoreError        - Domain errors (not found, validation)          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  rewards-db errors (separate crate)                                    │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  rewards-api errors (in app)                                           │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → HTTP 400 / 404         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation messages are part of the public API contract: clients match on
//! the text, so changing a message is a breaking change.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No transactions exist for the customer inside the reward window.
    ///
    /// ## When This Occurs
    /// - Customer ID doesn't exist at all
    /// - Customer exists but bought nothing between start and end date
    #[error("No transactions found for customer ID: {0}")]
    NoTransactionsFound(i64),

    /// Customer record cannot be found.
    #[error("Customer not found for ID: {0}")]
    CustomerNotFound(i64),

    /// Validation error (wraps ValidationError).
    ///
    /// Displays the inner message unchanged.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Each variant is one rule; the validators report the first rule broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Customer cannot be null.")]
    CustomerMissing,

    #[error("Customer name cannot be null or blank.")]
    NameBlank,

    #[error("Transaction list cannot be null or empty.")]
    TransactionsEmpty,

    #[error("Transaction date cannot be null.")]
    DateMissing,

    #[error("Transaction amount must be greater than zero.")]
    AmountNotPositive,

    #[error("Customer ID must be a positive number.")]
    CustomerIdNotPositive,

    #[error("Start date and end date cannot be null.")]
    DatesMissing,

    #[error("Start date cannot be after end date.")]
    DateRangeInverted,

    /// A date parameter did not parse as `yyyy-MM-dd`.
    #[error("Invalid date format for {field}: '{value}'. Expected yyyy-MM-dd.")]
    InvalidDateFormat { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            CoreError::NoTransactionsFound(7).to_string(),
            "No transactions found for customer ID: 7"
        );
        assert_eq!(
            CoreError::CustomerNotFound(3).to_string(),
            "Customer not found for ID: 3"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::CustomerIdNotPositive.to_string(),
            "Customer ID must be a positive number."
        );
        assert_eq!(
            ValidationError::DateRangeInverted.to_string(),
            "Start date cannot be after end date."
        );

        let err = ValidationError::InvalidDateFormat {
            field: "startDate".to_string(),
            value: "2024-13-01".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date format for startDate: '2024-13-01'. Expected yyyy-MM-dd."
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::NameBlank.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        // transparent: the client sees the validator's text unchanged
        assert_eq!(core_err.to_string(), "Customer name cannot be null or blank.");
    }
}
