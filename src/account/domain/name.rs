//! Validated account display name.

use super::AccountDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an account name, matching the `VARCHAR(50)` column.
pub const MAX_NAME_LENGTH: usize = 50;

/// Unique, human-readable account name.
///
/// Names are trimmed but otherwise kept as supplied; uniqueness is
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountName(String);

impl AccountName {
    /// Creates a validated account name.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::EmptyAccountName`] when the value is empty
    /// after trimming, or [`AccountDomainError::AccountNameTooLong`] when it
    /// exceeds 50 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, AccountDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(AccountDomainError::EmptyAccountName);
        }

        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(AccountDomainError::AccountNameTooLong(raw));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AccountName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for AccountName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
