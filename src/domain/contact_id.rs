//! ContactId value object.

use super::errors::ValidationResult;
use super::field::Field;
use super::validation::validate_bounded;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::fmt;

/// A type-safe wrapper for contact IDs.
///
/// IDs are at most 10 characters. The empty string is a valid ID.
///
/// # Example
///
/// ```
/// use contact_directory::domain::ContactId;
///
/// let id = ContactId::new("001").unwrap();
/// assert_eq!(id.as_str(), "001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(String);

impl ContactId {
    /// Create a new ContactId, validating its length.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooLong` if the ID exceeds 10 characters.
    pub fn new(id: impl Into<String>) -> ValidationResult<Self> {
        Self::from_optional(Some(id.into()))
    }

    /// Create a ContactId from a value that may be absent.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Missing` for `None`, otherwise as [`ContactId::new`].
    pub fn from_optional(id: Option<String>) -> ValidationResult<Self> {
        validate_bounded(Field::Id, id).map(Self)
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Lets `HashMap<ContactId, _>` be queried with a plain `&str`.
impl Borrow<str> for ContactId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactId::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
