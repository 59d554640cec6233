//! Individual constraint rule implementations.
//!
//! Each rule is a pure function over a JSON value. Rules return `Ok(())` on
//! success or the human-readable violation message on failure.

use super::schema::Constraint;
use serde_json::Value;

/// Shortest accepted phone number, in digits.
const PHONE_MIN_DIGITS: usize = 10;

/// Longest accepted phone number, in digits.
const PHONE_MAX_DIGITS: usize = 15;

/// Checks a single constraint against a field value.
///
/// # Errors
///
/// Returns the violation message naming `field` when the value does not
/// satisfy the constraint.
pub fn check(constraint: &Constraint, field: &str, value: &Value) -> Result<(), String> {
    match constraint {
        Constraint::PositiveInteger => validate_positive_integer(field, value),
        Constraint::IntegerRange { min, max } => validate_integer_range(field, value, *min, *max),
        Constraint::MaxLength(max) => validate_max_length(field, value, *max),
        Constraint::NotBlank => validate_not_blank(field, value),
        Constraint::Email => validate_email(field, value),
        Constraint::Phone => validate_phone(field, value),
        Constraint::OneOf(allowed) => validate_one_of(field, value, allowed),
    }
}

/// Reads a whole number from a JSON integer or a string of ASCII digits.
///
/// A leading `-` is accepted on strings so range checks can report negative
/// values; floats, blanks and anything else yield `None`.
#[must_use]
pub fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => {
            let digits = text.strip_prefix('-').unwrap_or(text);
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            text.parse().ok()
        }
        _ => None,
    }
}

/// Validates that a value is a positive whole number.
///
/// # Errors
///
/// Returns `"<field> must be a positive whole number"` otherwise.
pub fn validate_positive_integer(field: &str, value: &Value) -> Result<(), String> {
    match integer_value(value) {
        Some(number) if number > 0 => Ok(()),
        _ => Err(format!("{field} must be a positive whole number")),
    }
}

/// Validates that a value is a whole number within `min..=max`.
///
/// # Errors
///
/// Returns `"<field> must be a whole number between <min> and <max>"`
/// otherwise.
pub fn validate_integer_range(field: &str, value: &Value, min: i64, max: i64) -> Result<(), String> {
    match integer_value(value) {
        Some(number) if (min..=max).contains(&number) => Ok(()),
        _ => Err(format!(
            "{field} must be a whole number between {min} and {max}"
        )),
    }
}

/// Validates that a value is a string no longer than `max` codepoints.
///
/// # Errors
///
/// Returns `"<field> must be a string"` for non-strings or
/// `"<field> must be at most <max> characters"` when too long.
pub fn validate_max_length(field: &str, value: &Value, max: usize) -> Result<(), String> {
    let text = require_string(field, value)?;
    if text.chars().count() > max {
        return Err(format!("{field} must be at most {max} characters"));
    }
    Ok(())
}

/// Validates that a value is a string with visible content.
///
/// # Errors
///
/// Returns `"<field> must not be blank"` for empty or whitespace-only
/// strings.
pub fn validate_not_blank(field: &str, value: &Value) -> Result<(), String> {
    let text = require_string(field, value)?;
    if text.trim().is_empty() {
        return Err(format!("{field} must not be blank"));
    }
    Ok(())
}

/// Validates that a value is a single `local@domain` token.
///
/// # Errors
///
/// Returns `"<field> must be a valid email address"` otherwise.
pub fn validate_email(field: &str, value: &Value) -> Result<(), String> {
    let text = require_string(field, value)?;
    if is_email_shaped(text) {
        Ok(())
    } else {
        Err(format!("{field} must be a valid email address"))
    }
}

/// Validates that a value is an optional `+` followed by 10 to 15 digits.
///
/// # Errors
///
/// Returns `"<field> must be a valid phone number"` otherwise.
pub fn validate_phone(field: &str, value: &Value) -> Result<(), String> {
    let text = require_string(field, value)?;
    if is_phone_shaped(text) {
        Ok(())
    } else {
        Err(format!("{field} must be a valid phone number"))
    }
}

/// Validates that a value is one of the enumerated strings.
///
/// # Errors
///
/// Returns `"<field> must be one of: <a, b, ...>"` otherwise.
pub fn validate_one_of(field: &str, value: &Value, allowed: &[String]) -> Result<(), String> {
    let text = require_string(field, value)?;
    if allowed.iter().any(|candidate| candidate == text) {
        return Ok(());
    }
    Err(format!("{field} must be one of: {}", allowed.join(", ")))
}

/// Returns `true` for a single whitespace-free `local@domain` token.
#[must_use]
pub fn is_email_shaped(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = text.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}

/// Returns `true` for an optional leading `+` followed by 10 to 15 digits.
#[must_use]
pub fn is_phone_shaped(text: &str) -> bool {
    let digits = text.strip_prefix('+').unwrap_or(text);
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits.len())
        && digits.bytes().all(|b| b.is_ascii_digit())
}

fn require_string<'a>(field: &str, value: &'a Value) -> Result<&'a str, String> {
    value
        .as_str()
        .ok_or_else(|| format!("{field} must be a string"))
}
