//! Error types for the contact directory.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain`] and are re-exported here.

use thiserror::Error;

pub use crate::domain::{ValidationError, ValidationResult};

/// Errors raised when an ID's presence in the directory does not match
/// what the operation expects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No contact is stored under the ID
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// The contact cannot be added, e.g. its ID is already taken
    #[error("Contact is invalid or already exists: {0}")]
    DuplicateOrInvalidEntry(String),
}

/// Errors returned by directory operations that both look up and mutate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// The new field value was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The contact ID could not be resolved
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with LookupError
pub type LookupResult<T> = Result<T, LookupError>;

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
