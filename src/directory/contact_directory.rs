//! Single-owner directory of contacts keyed by ID.

use crate::config::DirectoryConfig;
use crate::domain::{ContactId, Field, ValidationResult};
use crate::error::{DirectoryResult, LookupError, LookupResult};
use crate::models::Contact;
use std::collections::HashMap;
use tracing::debug;

/// A collection of contacts with unique IDs.
///
/// Every key equals the ID of the contact stored under it. Operations
/// either succeed completely or fail without changing anything.
///
/// # Example
///
/// ```
/// use contact_directory::{Contact, Directory};
///
/// let mut directory = Directory::new();
/// let contact = Contact::new("001", "Jane", "Doe", "5551234567", "456 Elm St").unwrap();
/// directory.add_contact(contact).unwrap();
///
/// directory.update_first_name("001", "Janet").unwrap();
/// assert_eq!(directory.get("001").unwrap().first_name(), "Janet");
///
/// assert!(directory.update_phone("001", "123").is_err());
/// assert_eq!(directory.get("001").unwrap().phone(), "5551234567");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Directory {
    contacts: HashMap<ContactId, Contact>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty directory with room for `capacity` contacts.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contacts: HashMap::with_capacity(capacity),
        }
    }

    /// Create an empty directory sized from configuration.
    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    /// Add a contact under its own ID.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::DuplicateOrInvalidEntry` if a contact with the
    /// same ID is already present. The directory is unchanged.
    pub fn add_contact(&mut self, contact: Contact) -> LookupResult<()> {
        if self.contacts.contains_key(contact.id()) {
            debug!(contact_id = %contact.id(), "Rejected duplicate contact");
            return Err(LookupError::DuplicateOrInvalidEntry(contact.id().to_string()));
        }

        debug!(contact_id = %contact.id(), "Contact added");
        self.contacts.insert(contact.contact_id().clone(), contact);
        Ok(())
    }

    /// Remove the contact stored under `id` and hand it back.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::NotFound` if no such contact exists.
    pub fn delete_contact(&mut self, id: &str) -> LookupResult<Contact> {
        match self.contacts.remove(id) {
            Some(contact) => {
                debug!(contact_id = %id, "Contact deleted");
                Ok(contact)
            }
            None => {
                debug!(contact_id = %id, "Delete of unknown contact");
                Err(LookupError::NotFound(id.to_string()))
            }
        }
    }

    pub fn update_first_name(
        &mut self,
        id: &str,
        first_name: impl Into<String>,
    ) -> DirectoryResult<()> {
        self.update(id, Field::FirstName, |contact| {
            contact.set_first_name(first_name)
        })
    }

    pub fn update_last_name(
        &mut self,
        id: &str,
        last_name: impl Into<String>,
    ) -> DirectoryResult<()> {
        self.update(id, Field::LastName, |contact| contact.set_last_name(last_name))
    }

    pub fn update_phone(&mut self, id: &str, phone: impl Into<String>) -> DirectoryResult<()> {
        self.update(id, Field::Phone, |contact| contact.set_phone(phone))
    }

    pub fn update_address(&mut self, id: &str, address: impl Into<String>) -> DirectoryResult<()> {
        self.update(id, Field::Address, |contact| contact.set_address(address))
    }

    /// Look up a contact by exact ID.
    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.contacts.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// IDs of all stored contacts, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.contacts.keys().map(ContactId::as_str)
    }

    /// All stored contacts, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    fn update<F>(&mut self, id: &str, field: Field, apply: F) -> DirectoryResult<()>
    where
        F: FnOnce(&mut Contact) -> ValidationResult<()>,
    {
        let contact = self.contact_mut(id)?;
        match apply(contact) {
            Ok(()) => {
                debug!(contact_id = %id, field = %field, "Contact updated");
                Ok(())
            }
            Err(e) => {
                debug!(contact_id = %id, error = %e, "Rejected contact update");
                Err(e.into())
            }
        }
    }

    fn contact_mut(&mut self, id: &str) -> LookupResult<&mut Contact> {
        self.contacts.get_mut(id).ok_or_else(|| {
            debug!(contact_id = %id, "Lookup of unknown contact");
            LookupError::NotFound(id.to_string())
        })
    }
}
