//! Repository port for account persistence.
//!
//! Mutations are expressed as work over [`AccountStatements`] executed
//! inside one transactional scope by [`AccountRepository::transact`].

use crate::account::domain::{
    Account, AccountId, AccountName, EmailAddress, PasswordDigest,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for account store operations.
pub type AccountStoreResult<T> = Result<T, AccountStoreError>;

/// Individual statements available inside a transactional scope.
///
/// Each method maps to one parameterised statement against the store.
pub trait AccountStatements {
    /// Returns `true` when an account with this identifier exists.
    ///
    /// # Errors
    ///
    /// Returns [`AccountStoreError`] when the lookup fails.
    fn id_exists(&mut self, id: AccountId) -> AccountStoreResult<bool>;

    /// Returns `true` when any account holds this name.
    ///
    /// # Errors
    ///
    /// Returns [`AccountStoreError`] when the lookup fails.
    fn name_exists(&mut self, name: &AccountName) -> AccountStoreResult<bool>;

    /// Returns `true` when any account holds this email address.
    ///
    /// # Errors
    ///
    /// Returns [`AccountStoreError`] when the lookup fails.
    fn email_exists(&mut self, email: &EmailAddress) -> AccountStoreResult<bool>;

    /// Inserts a new account row.
    ///
    /// # Errors
    ///
    /// Returns [`AccountStoreError`] when the insert fails, including a
    /// store-level unique violation.
    fn insert(&mut self, account: &Account) -> AccountStoreResult<()>;

    /// Renames the account currently holding `old`; returns affected rows.
    ///
    /// # Errors
    ///
    /// Returns [`AccountStoreError`] when the update fails.
    fn update_name(&mut self, old: &AccountName, new: &AccountName) -> AccountStoreResult<u64>;

    /// Re-addresses the account currently holding `old`; returns affected
    /// rows.
    ///
    /// # Errors
    ///
    /// Returns [`AccountStoreError`] when the update fails.
    fn update_email(
        &mut self,
        old: &EmailAddress,
        new: &EmailAddress,
    ) -> AccountStoreResult<u64>;

    /// Replaces the password digest of account `id` when it currently
    /// matches `old`; returns affected rows.
    ///
    /// # Errors
    ///
    /// Returns [`AccountStoreError`] when the update fails.
    fn update_password(
        &mut self,
        id: AccountId,
        old: &PasswordDigest,
        new: &PasswordDigest,
    ) -> AccountStoreResult<u64>;
}

/// Account persistence contract.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Runs `work` inside a single transactional scope.
    ///
    /// Implementations commit when `work` returns `Ok` and discard every
    /// statement when it returns `Err`.
    ///
    /// # Errors
    ///
    /// Returns the error raised by `work`, or [`AccountStoreError`] when the
    /// scope cannot be opened or committed.
    async fn transact<T, F>(&self, work: F) -> AccountStoreResult<T>
    where
        F: FnOnce(&mut dyn AccountStatements) -> AccountStoreResult<T> + Send + 'static,
        T: Send + 'static;

    /// Finds an account by identifier.
    ///
    /// Returns `None` when the account does not exist.
    async fn find_by_id(&self, id: AccountId) -> AccountStoreResult<Option<Account>>;
}

/// Errors returned by account repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AccountStoreError {
    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AccountStoreError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<diesel::result::Error> for AccountStoreError {
    fn from(err: diesel::result::Error) -> Self {
        Self::persistence(err)
    }
}
