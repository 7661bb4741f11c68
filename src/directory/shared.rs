//! Thread-safe handle to a [`Directory`].

use super::Directory;
use crate::error::{DirectoryResult, LookupResult};
use crate::models::Contact;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A clonable handle that serializes access to one [`Directory`].
///
/// Each operation holds the lock across its lookup, validation, and
/// mutation, so no two operations interleave on the collection.
#[derive(Debug, Clone, Default)]
pub struct SharedDirectory {
    inner: Arc<Mutex<Directory>>,
}

impl SharedDirectory {
    pub fn new(directory: Directory) -> Self {
        Self {
            inner: Arc::new(Mutex::new(directory)),
        }
    }

    pub fn add_contact(&self, contact: Contact) -> LookupResult<()> {
        self.lock().add_contact(contact)
    }

    pub fn delete_contact(&self, id: &str) -> LookupResult<Contact> {
        self.lock().delete_contact(id)
    }

    pub fn update_first_name(
        &self,
        id: &str,
        first_name: impl Into<String>,
    ) -> DirectoryResult<()> {
        self.lock().update_first_name(id, first_name)
    }

    pub fn update_last_name(&self, id: &str, last_name: impl Into<String>) -> DirectoryResult<()> {
        self.lock().update_last_name(id, last_name)
    }

    pub fn update_phone(&self, id: &str, phone: impl Into<String>) -> DirectoryResult<()> {
        self.lock().update_phone(id, phone)
    }

    pub fn update_address(&self, id: &str, address: impl Into<String>) -> DirectoryResult<()> {
        self.lock().update_address(id, address)
    }

    /// A snapshot of the contact stored under `id`.
    pub fn get(&self, id: &str) -> Option<Contact> {
        self.lock().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Run `f` with exclusive access to the directory.
    pub fn with<R>(&self, f: impl FnOnce(&mut Directory) -> R) -> R {
        f(&mut self.lock())
    }

    // Operations never leave the directory half-updated, so a poisoned
    // lock still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Directory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Directory> for SharedDirectory {
    fn from(directory: Directory) -> Self {
        Self::new(directory)
    }
}
