//! Contact field names and their length limits.

use serde::Serialize;
use std::fmt;

/// One of the five fields carried by a [`Contact`](crate::Contact).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Id,
    FirstName,
    LastName,
    Phone,
    Address,
}

impl Field {
    /// Maximum length in characters.
    ///
    /// For [`Field::Phone`] this is also the exact required length.
    pub const fn max_len(self) -> usize {
        match self {
            Self::Id | Self::FirstName | Self::LastName | Self::Phone => 10,
            Self::Address => 30,
        }
    }

    /// Human-readable field name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "contact ID",
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::Phone => "phone number",
            Self::Address => "address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
