//! # Store Error Types
//!
//! Error types for storage, inventory and authentication operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_json::Error        CoreError (pastry-core)          │
//! │       │                                    │                            │
//! │       ▼                                    ▼                            │
//! │  StoreError (this module) ◄────────────────┘                           │
//! │       │                                                                 │
//! │       ├──► AuthError::Store   (sign-in / registration)                 │
//! │       ▼                                                                 │
//! │  Front-end displays the message, session carries on                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pastry_core::{CoreError, ValidationError};
use thiserror::Error;

/// Storage and inventory errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the durable backend failed.
    ///
    /// ## When This Occurs
    /// - Data directory not writable
    /// - Disk full
    /// - File removed between listing and reading
    #[error("Storage I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A stored entry exists but cannot be decoded.
    ///
    /// ## When This Occurs
    /// - Hand-edited data file with broken JSON
    /// - Entry written by an incompatible version
    #[error("Stored entry '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    /// Encoding a collection for storage failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Domain rule violation (validation, supplier with dependents).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Creates an Io error tagged with the storage key.
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            key: key.into(),
            source,
        }
    }

    /// Creates a Corrupt error for an undecodable entry.
    pub fn corrupt(key: impl Into<String>, reason: impl ToString) -> Self {
        StoreError::Corrupt {
            key: key.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Sign-in and registration errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No demo identity or registered account matches.
    ///
    /// Deliberately does not say which half was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration with an email already in the `users` collection.
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for storage and inventory operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_lifts_into_store_error() {
        let err: StoreError = ValidationError::required("name").into();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::Validation(ValidationError::Required { .. }))
        ));
        assert_eq!(err.to_string(), "Validation error: name is required");
    }

    #[test]
    fn test_corrupt_message() {
        let err = StoreError::corrupt("products", "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "Stored entry 'products' is corrupt: expected value at line 1"
        );
    }

    #[test]
    fn test_invalid_credentials_message() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }
}
