//! Account aggregate root.

use super::{AccountId, AccountName, EmailAddress, PasswordDigest};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Account aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    name: AccountName,
    email: EmailAddress,
    password: PasswordDigest,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAccountData {
    /// Persisted account identifier.
    pub id: AccountId,
    /// Persisted account name.
    pub name: AccountName,
    /// Persisted email address.
    pub email: EmailAddress,
    /// Persisted password digest.
    pub password: PasswordDigest,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account stamped with the current time.
    #[must_use]
    pub fn new(
        id: AccountId,
        name: AccountName,
        email: EmailAddress,
        password: PasswordDigest,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs an account from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAccountData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            email: data.email,
            password: data.password,
            created_at: data.created_at,
        }
    }

    /// Returns the account identifier.
    #[must_use]
    pub const fn id(&self) -> AccountId {
        self.id
    }

    /// Returns the account name.
    #[must_use]
    pub const fn name(&self) -> &AccountName {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the password digest.
    #[must_use]
    pub const fn password(&self) -> &PasswordDigest {
        &self.password
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the account name.
    pub fn rename(&mut self, name: AccountName) {
        self.name = name;
    }

    /// Replaces the email address.
    pub fn change_email(&mut self, email: EmailAddress) {
        self.email = email;
    }

    /// Replaces the password digest.
    pub fn change_password(&mut self, password: PasswordDigest) {
        self.password = password;
    }
}
