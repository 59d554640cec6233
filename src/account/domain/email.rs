//! Validated email address.

use super::AccountDomainError;
use crate::validation::rules::is_email_shaped;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an email address, matching the `VARCHAR(100)` column.
pub const MAX_EMAIL_LENGTH: usize = 100;

/// Unique account email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// No trimming happens here: surrounding whitespace makes the value
    /// invalid.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::InvalidEmail`] for values that are not a
    /// single `local@domain` token, or [`AccountDomainError::EmailTooLong`]
    /// past 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();

        if !is_email_shaped(&raw) {
            return Err(AccountDomainError::InvalidEmail(raw));
        }

        if raw.chars().count() > MAX_EMAIL_LENGTH {
            return Err(AccountDomainError::EmailTooLong(raw));
        }

        Ok(Self(raw))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
