//! # Error Types
//!
//! Domain-specific error types for pastry-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pastry-core errors (this file)                                        │
//! │  ├── CoreError        - Domain rule violations                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  pastry-store errors (separate crate)                                  │
//! │  ├── StoreError       - Storage and inventory failures                 │
//! │  └── AuthError        - Sign-in and registration failures              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError/AuthError → UI         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain rule violations.
///
/// Every variant is recoverable at the UI-interaction level: the view shows
/// the message and the session carries on.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A supplier still has products pointing at it.
    ///
    /// ## When This Occurs
    /// ```text
    /// Suppliers page: click "Delete" on "Moinho Paulista"
    ///      │
    ///      ▼
    /// 1 product has supplier_id == "1"
    ///      │
    ///      ▼
    /// SupplierHasProducts { id: "1", count: 1 }
    ///      │
    ///      ▼
    /// UI shows the message, supplier list unchanged
    /// ```
    #[error("Supplier {id} cannot be deleted: {count} product(s) still reference it")]
    SupplierHasProducts { id: String, count: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when form input doesn't meet requirements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
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
    fn test_error_messages() {
        let err = CoreError::SupplierHasProducts {
            id: "1".to_string(),
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "Supplier 1 cannot be deleted: 2 product(s) still reference it"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::required("name");
        assert_eq!(err.to_string(), "name is required");
        assert_eq!(err.field(), "name");

        let err = ValidationError::TooLong {
            field: "address".to_string(),
            max: 500,
        };
        assert_eq!(err.to_string(), "address must be at most 500 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::required("email").into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
