//! Identifier type for accounts.

use super::AccountDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-assigned numeric account identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(i64);

impl AccountId {
    /// Creates a validated account identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AccountDomainError::InvalidAccountId`] when the value is not
    /// positive.
    pub const fn new(value: i64) -> Result<Self, AccountDomainError> {
        if value <= 0 {
            return Err(AccountDomainError::InvalidAccountId(value));
        }
        Ok(Self(value))
    }

    /// Returns the wrapped value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
