//! Test fixtures shared by the integration tests.

#![allow(dead_code)]

use contact_directory::{Contact, ContactDraft, Directory};

/// Ten characters, the limit for IDs and names.
pub const MAX_NAME: &str = "ABCDEFGHIJ";

/// Thirty characters, the limit for addresses.
pub const MAX_ADDRESS: &str = "123456789012345678901234567890";

/// The contact used throughout the directory scenarios.
pub fn jane() -> Contact {
    Contact::new("001", "Jane", "Doe", "5551234567", "456 Elm St").unwrap()
}

/// A valid contact with the given ID.
pub fn sample_contact(id: &str) -> Contact {
    Contact::new(id, "John", "Doe", "1234567890", "123 Main St").unwrap()
}

/// A draft with every field present and valid.
pub fn full_draft() -> ContactDraft {
    ContactDraft {
        id: Some("123".to_string()),
        first_name: Some("John".to_string()),
        last_name: Some("Doe".to_string()),
        phone: Some("1234567890".to_string()),
        address: Some("123 Main St".to_string()),
    }
}

/// A directory pre-loaded with contacts for each ID.
pub fn directory_with(ids: &[&str]) -> Directory {
    let mut directory = Directory::new();
    for id in ids {
        directory.add_contact(sample_contact(id)).unwrap();
    }
    directory
}

/// Every (id, first, last, phone, address) tuple in the directory, sorted by ID.
pub fn snapshot(directory: &Directory) -> Vec<(String, String, String, String, String)> {
    let mut rows: Vec<_> = directory
        .iter()
        .map(|c| {
            (
                c.id().to_string(),
                c.first_name().to_string(),
                c.last_name().to_string(),
                c.phone().to_string(),
                c.address().to_string(),
            )
        })
        .collect();
    rows.sort();
    rows
}
