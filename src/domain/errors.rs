//! Domain validation errors.

use super::field::Field;
use thiserror::Error;

/// Errors that can occur while validating a contact field.
///
/// Every variant names the offending field, so callers can turn it into a
/// user-facing message without re-deriving which input was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The field was not supplied at all.
    #[error("{field} is required")]
    Missing { field: Field },

    /// The field is longer than its maximum length.
    #[error("{field} must not be longer than {max} characters (got {actual})")]
    TooLong {
        field: Field,
        max: usize,
        actual: usize,
    },

    /// The field does not match its required format.
    #[error("{field} is malformed: {reason}")]
    Malformed { field: Field, reason: &'static str },
}

impl ValidationError {
    /// The field this error refers to.
    pub fn field(&self) -> Field {
        match self {
            Self::Missing { field }
            | Self::TooLong { field, .. }
            | Self::Malformed { field, .. } => *field,
        }
    }
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
