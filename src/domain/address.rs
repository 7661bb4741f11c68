//! Address value object.

use super::errors::ValidationResult;
use super::field::Field;
use super::validation::validate_bounded;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A postal address of at most 30 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    /// Create a new Address, validating its length.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooLong` if the address exceeds 30 characters.
    pub fn new(address: impl Into<String>) -> ValidationResult<Self> {
        Self::from_optional(Some(address.into()))
    }

    /// Create an Address from a value that may be absent.
    pub fn from_optional(address: Option<String>) -> ValidationResult<Self> {
        validate_bounded(Field::Address, address).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
