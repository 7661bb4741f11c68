//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact:
//! IDs, names, phone numbers, and addresses. Each wrapper validates at
//! construction time through the shared validators in [`validation`], so an
//! invalid value can never be represented.

pub mod address;
pub mod contact_id;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;
pub mod validation;

pub use address::Address;
pub use contact_id::ContactId;
pub use errors::{ValidationError, ValidationResult};
pub use field::Field;
pub use name::{NamePart, PersonName};
pub use phone::PhoneNumber;
pub use validation::{validate_bounded, validate_phone};
