//! Field validation for roster input.
//!
//! Stateless predicates checked before anything enters the store, plus the
//! name casing applied on add and update.

use std::sync::LazyLock;

use medicos_types::limits::{MIN_PASSWORD_LEN, MIN_USER_LEN, PHONE_LEN, TAX_ID_LEN};
use regex::Regex;

use crate::types::ValidationError;

/// Prefix match of `something@domain.tld`.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email pattern is valid"));

/// Returns true if `value` is non-empty and made only of ASCII digits.
pub fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Returns true if `value` has exactly `n` characters.
pub fn has_length(value: &str, n: usize) -> bool {
    value.chars().count() == n
}

/// Validates login credentials.
///
/// The user needs at least 4 characters, the password at least 8, and the
/// email must look like `local@domain.tld`.
pub fn validate_user(user: &str, password: &str, email: &str) -> bool {
    user.chars().count() >= MIN_USER_LEN
        && password.chars().count() >= MIN_PASSWORD_LEN
        && EMAIL_PATTERN.is_match(email)
}

/// Returns true if the professional's fields pass [`check_professional`].
pub fn validate_professional(
    name: &str,
    surname: &str,
    age: &str,
    tax_id: &str,
    phone: &str,
) -> bool {
    check_professional(name, surname, age, tax_id, phone).is_ok()
}

/// Checks the format of a professional's identity fields.
///
/// Name and surname must be non-empty and not purely numeric. Age, CUIL/CUIT
/// and phone must be digits only; the CUIL/CUIT has 11 digits and the phone 8.
/// The first violated rule is reported.
pub fn check_professional(
    name: &str,
    surname: &str,
    age: &str,
    tax_id: &str,
    phone: &str,
) -> Result<(), ValidationError> {
    check_name("name", name)?;
    check_name("surname", surname)?;

    check_digits("age", age)?;
    check_digits("tax_id", tax_id)?;
    check_digits("phone", phone)?;

    check_length("tax_id", tax_id, TAX_ID_LEN)?;
    check_length("phone", phone, PHONE_LEN)?;

    Ok(())
}

/// Returns true if `tax_id` is a well-formed CUIL/CUIT lookup key.
pub fn is_tax_id(tax_id: &str) -> bool {
    is_numeric(tax_id) && has_length(tax_id, TAX_ID_LEN)
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest.
///
/// `"maría JOSÉ"` becomes `"María José"`; `"o'neil"` becomes `"O'Neil"`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

fn check_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if is_numeric(value) {
        return Err(ValidationError::Numeric {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

fn check_digits(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if is_numeric(value) {
        Ok(())
    } else {
        Err(ValidationError::NotNumeric {
            field,
            value: value.to_string(),
        })
    }
}

fn check_length(field: &'static str, value: &str, expected: usize) -> Result<(), ValidationError> {
    if has_length(value, expected) {
        Ok(())
    } else {
        Err(ValidationError::WrongLength {
            field,
            expected,
            found: value.chars().count(),
        })
    }
}
