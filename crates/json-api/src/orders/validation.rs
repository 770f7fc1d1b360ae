//! Checkout request validation.
//!
//! Explicit per-request validation, evaluated before any store interaction.
//! Each invalid field maps to the first violated rule's message; the map
//! keeps field declaration order.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::orders::handlers::checkout::CheckoutRequest;

pub(crate) const FULL_NAME_REQUIRED: &str = "fullName is required";
pub(crate) const FULL_NAME_LETTERS: &str =
    "Name should only contain letters A-Z, a-z, and spaces";
pub(crate) const EMAIL_SYNTAX: &str = "should have a valid email address syntax";
pub(crate) const PHONE_FORMAT: &str = "Phone number should be in the format xxx-xxx-xxxx";
pub(crate) const CREDIT_CARD_FORMAT: &str =
    "Credit card should be 19 digits long and contain only digits";

/// Ordered field → message violation map.
///
/// Serializes as a JSON object whose keys keep insertion order.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct FieldErrors(Vec<(&'static str, &'static str)>);

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push((field, message));
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;

        for (field, message) in &self.0 {
            map.serialize_entry(field, message)?;
        }

        map.end()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;

        for (position, (field, message)) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{field}: {message}")?;
        }

        f.write_str("}")
    }
}

/// Validate a checkout payload, reporting the first violated rule per field.
pub(crate) fn validate_checkout(request: &CheckoutRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if request.full_name.trim().is_empty() {
        errors.push("fullName", FULL_NAME_REQUIRED);
    } else if !is_letters_and_spaces(&request.full_name) {
        errors.push("fullName", FULL_NAME_LETTERS);
    }

    if !is_valid_email(&request.email) {
        errors.push("email", EMAIL_SYNTAX);
    }

    if !is_phone_number(&request.phone_number) {
        errors.push("phoneNumber", PHONE_FORMAT);
    }

    if !is_credit_card_number(&request.credit_card_number) {
        errors.push("creditCardNumber", CREDIT_CARD_FORMAT);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn is_letters_and_spaces(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// One `@` separating a non-empty local part from a non-empty domain, with
/// no whitespace anywhere.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
}

/// `NNN-NNN-NNNN`
fn is_phone_number(value: &str) -> bool {
    let mut parts = value.split('-');

    matches!(
        (parts.next(), parts.next(), parts.next(), parts.next()),
        (Some(area), Some(prefix), Some(line), None)
            if is_digits(area, 3) && is_digits(prefix, 3) && is_digits(line, 4)
    )
}

/// Exactly nineteen ASCII digits.
fn is_credit_card_number(value: &str) -> bool {
    is_digits(value, 19)
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}
