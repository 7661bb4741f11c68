//! Property tests for field rules and directory invariants.

mod common;

use common::*;
use contact_directory::{Contact, Directory, Field, ValidationError};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn valid_phone() -> impl Strategy<Value = String> {
    "[0-9]{10}"
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn bounded_fields_store_valid_input_exactly(
        id in "\\PC{0,10}",
        first in "\\PC{0,10}",
        last in "\\PC{0,10}",
        address in "\\PC{0,30}",
        phone in valid_phone(),
    ) {
        let contact = Contact::new(&id, &first, &last, &phone, &address).unwrap();
        prop_assert_eq!(contact.id(), id.as_str());
        prop_assert_eq!(contact.first_name(), first.as_str());
        prop_assert_eq!(contact.last_name(), last.as_str());
        prop_assert_eq!(contact.phone(), phone.as_str());
        prop_assert_eq!(contact.address(), address.as_str());
    }

    #[test]
    fn overlong_names_are_rejected(name in "\\PC{11,40}") {
        let err = Contact::new("001", &name, "Doe", "5551234567", "").unwrap_err();
        prop_assert_eq!(err.field(), Field::FirstName);

        let mut contact = jane();
        prop_assert!(contact.set_last_name(name.as_str()).is_err());
        prop_assert_eq!(contact, jane());
    }

    #[test]
    fn overlong_ids_are_rejected(id in "\\PC{11,40}") {
        let err = Contact::new(&id, "Jane", "Doe", "5551234567", "").unwrap_err();
        let is_too_long = matches!(err, ValidationError::TooLong { field: Field::Id, .. });
        prop_assert!(is_too_long);
    }

    #[test]
    fn overlong_addresses_are_rejected(address in "\\PC{31,80}") {
        let mut directory = Directory::new();
        directory.add_contact(jane()).unwrap();
        prop_assert!(directory.update_address("001", address).is_err());
        prop_assert_eq!(directory.get("001").unwrap().address(), "456 Elm St");
    }

    #[test]
    fn phones_of_wrong_length_are_rejected(phone in "[0-9]{0,30}") {
        prop_assume!(phone.len() != 10);
        prop_assert!(Contact::new("001", "Jane", "Doe", &phone, "").is_err());
    }

    #[test]
    fn phones_with_a_non_digit_are_rejected(
        digits in valid_phone(),
        position in 0usize..10,
        replacement in "[^0-9]",
    ) {
        let mut chars: Vec<char> = digits.chars().collect();
        chars[position] = replacement.chars().next().unwrap();
        let phone: String = chars.into_iter().collect();

        let mut directory = Directory::new();
        directory.add_contact(jane()).unwrap();
        prop_assert!(directory.update_phone("001", phone).is_err());
        prop_assert_eq!(directory.get("001").unwrap().phone(), "5551234567");
    }

    #[test]
    fn valid_phones_are_stored_exactly(phone in valid_phone()) {
        let mut directory = Directory::new();
        directory.add_contact(jane()).unwrap();
        directory.update_phone("001", phone.as_str()).unwrap();
        prop_assert_eq!(directory.get("001").unwrap().phone(), phone.as_str());
    }

    #[test]
    fn duplicate_ids_are_always_rejected(
        first in "[A-Za-z]{0,10}",
        phone in valid_phone(),
    ) {
        let mut directory = Directory::new();
        directory.add_contact(jane()).unwrap();

        let same_id = Contact::new("001", &first, "Other", &phone, "Elsewhere").unwrap();
        prop_assert!(directory.add_contact(same_id).is_err());
        prop_assert_eq!(directory.get("001"), Some(&jane()));
    }

    #[test]
    fn failed_operations_leave_directory_unchanged(
        ids in proptest::collection::hash_set("[a-z0-9]{1,10}", 1..8),
        missing in "[A-Z]{1,10}",
        bad_name in "\\PC{11,20}",
    ) {
        let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
        let mut directory = directory_with(&ids);
        let before = snapshot(&directory);
        let existing = ids[0];

        prop_assert!(directory.delete_contact(&missing).is_err());
        prop_assert!(directory.update_first_name(&missing, "Ghost").is_err());
        prop_assert!(directory.update_first_name(existing, bad_name.as_str()).is_err());
        prop_assert!(directory.update_phone(existing, "not-digits").is_err());
        prop_assert!(directory.add_contact(sample_contact(existing)).is_err());

        prop_assert_eq!(snapshot(&directory), before);
    }

    #[test]
    fn keys_always_match_contact_ids(
        ids in proptest::collection::vec("[a-z0-9]{0,10}", 0..16),
    ) {
        let mut directory = Directory::new();
        for id in &ids {
            let _ = directory.add_contact(sample_contact(id));
        }
        for id in directory.ids() {
            prop_assert_eq!(directory.get(id).unwrap().id(), id);
        }
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        prop_assert_eq!(directory.len(), unique.len());
    }
}
