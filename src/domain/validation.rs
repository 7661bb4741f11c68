//! Shared field validators.
//!
//! Construction and every mutator go through these functions, so a rule is
//! written once and applies everywhere the field can change.

use super::errors::{ValidationError, ValidationResult};
use super::field::Field;
use once_cell::sync::Lazy;
use regex::Regex;

// `\d` is Unicode-aware in the regex crate, so spell out the ASCII range.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is a valid regex"));

/// Validate a required, length-bounded text field.
///
/// Empty strings are accepted. Length is counted in characters, not bytes.
///
/// # Errors
///
/// - `ValidationError::Missing` if `value` is `None`
/// - `ValidationError::TooLong` if it exceeds `field.max_len()`
pub fn validate_bounded(field: Field, value: Option<String>) -> ValidationResult<String> {
    let value = value.ok_or(ValidationError::Missing { field })?;

    let max = field.max_len();
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }

    Ok(value)
}

/// Validate a phone number: exactly ten ASCII digits, nothing else.
///
/// # Errors
///
/// - `ValidationError::Missing` if `value` is `None`
/// - `ValidationError::Malformed` for any other length or any non-digit
pub fn validate_phone(value: Option<String>) -> ValidationResult<String> {
    let value = value.ok_or(ValidationError::Missing {
        field: Field::Phone,
    })?;

    if !PHONE_PATTERN.is_match(&value) {
        return Err(ValidationError::Malformed {
            field: Field::Phone,
            reason: "must be exactly 10 digits",
        });
    }

    Ok(value)
}
