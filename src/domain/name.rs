//! PersonName value object.

use super::errors::ValidationResult;
use super::field::Field;
use super::validation::validate_bounded;
use serde::{Serialize, Serializer};
use std::fmt;

/// Which half of a person's name a [`PersonName`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePart {
    First,
    Last,
}

impl NamePart {
    /// The contact field this part is validated as.
    pub const fn field(self) -> Field {
        match self {
            Self::First => Field::FirstName,
            Self::Last => Field::LastName,
        }
    }
}

/// A first or last name of at most 10 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName for the given part.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooLong` if the name exceeds 10 characters.
    pub fn new(part: NamePart, name: impl Into<String>) -> ValidationResult<Self> {
        Self::from_optional(part, Some(name.into()))
    }

    /// Create a PersonName from a value that may be absent.
    pub fn from_optional(part: NamePart, name: Option<String>) -> ValidationResult<Self> {
        validate_bounded(part.field(), name).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
