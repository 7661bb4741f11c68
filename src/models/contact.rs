//! Contact model representing one person in the directory.

use crate::domain::{
    Address, ContactId, NamePart, PersonName, PhoneNumber, ValidationError, ValidationResult,
};
use serde::{Deserialize, Serialize};

/// A validated contact record.
///
/// Every field satisfies its rule at all times: construction validates all
/// five fields, and each setter validates its argument before replacing the
/// stored value. The ID is fixed at construction and has no setter.
///
/// # Example
///
/// ```
/// use contact_directory::Contact;
///
/// let mut contact = Contact::new("001", "Jane", "Doe", "5551234567", "456 Elm St").unwrap();
/// assert_eq!(contact.first_name(), "Jane");
///
/// assert!(contact.set_phone("123").is_err());
/// assert_eq!(contact.phone(), "5551234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    id: ContactId,
    first_name: PersonName,
    last_name: PersonName,
    phone: PhoneNumber,
    address: Address,
}

impl Contact {
    /// Create a new contact.
    ///
    /// Fields are validated in order (id, first name, last name, phone,
    /// address) and the first violation is returned.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` naming the first field that breaks its rule.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
    ) -> ValidationResult<Self> {
        Self::from_parts(
            Some(id.into()),
            Some(first_name.into()),
            Some(last_name.into()),
            Some(phone.into()),
            Some(address.into()),
        )
    }

    fn from_parts(
        id: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
        phone: Option<String>,
        address: Option<String>,
    ) -> ValidationResult<Self> {
        Ok(Self {
            id: ContactId::from_optional(id)?,
            first_name: PersonName::from_optional(NamePart::First, first_name)?,
            last_name: PersonName::from_optional(NamePart::Last, last_name)?,
            phone: PhoneNumber::from_optional(phone)?,
            address: Address::from_optional(address)?,
        })
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// The ID as its value object, used as the directory key.
    pub fn contact_id(&self) -> &ContactId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    /// Replace the first name. On error the contact is unchanged.
    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> ValidationResult<()> {
        self.first_name = PersonName::new(NamePart::First, first_name)?;
        Ok(())
    }

    /// Replace the last name. On error the contact is unchanged.
    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> ValidationResult<()> {
        self.last_name = PersonName::new(NamePart::Last, last_name)?;
        Ok(())
    }

    /// Replace the phone number. On error the contact is unchanged.
    pub fn set_phone(&mut self, phone: impl Into<String>) -> ValidationResult<()> {
        self.phone = PhoneNumber::new(phone)?;
        Ok(())
    }

    /// Replace the address. On error the contact is unchanged.
    pub fn set_address(&mut self, address: impl Into<String>) -> ValidationResult<()> {
        self.address = Address::new(address)?;
        Ok(())
    }
}

/// Unvalidated contact input where any field may be absent.
///
/// This is the shape of data arriving from outside the crate, e.g. a form
/// or a JSON payload. Converting it into a [`Contact`] applies the same
/// rules as [`Contact::new`] and reports absent fields as
/// `ValidationError::Missing`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactDraft {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl TryFrom<ContactDraft> for Contact {
    type Error = ValidationError;

    fn try_from(draft: ContactDraft) -> Result<Self, Self::Error> {
        Contact::from_parts(
            draft.id,
            draft.first_name,
            draft.last_name,
            draft.phone,
            draft.address,
        )
    }
}
