//! In-memory account repository for tests and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::{
    domain::{Account, AccountId, AccountName, EmailAddress, PasswordDigest},
    ports::{AccountRepository, AccountStatements, AccountStoreError, AccountStoreResult},
};

/// Thread-safe in-memory account repository.
///
/// [`AccountRepository::transact`] holds the write lock for the whole unit
/// of work and restores the previous state when the work fails, giving the
/// same all-or-nothing behaviour as a database transaction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    state: Arc<RwLock<InMemoryAccountState>>,
}

#[derive(Debug, Clone, Default)]
struct InMemoryAccountState {
    accounts: HashMap<AccountId, Account>,
    name_index: HashMap<AccountName, AccountId>,
    email_index: HashMap<EmailAddress, AccountId>,
}

impl InMemoryAccountRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored accounts.
    ///
    /// # Errors
    ///
    /// Returns [`AccountStoreError`] when the lock is poisoned.
    pub fn len(&self) -> AccountStoreResult<usize> {
        let state = self.state.read().map_err(|err| {
            AccountStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.accounts.len())
    }

    /// Returns `true` when no accounts are stored.
    ///
    /// # Errors
    ///
    /// Returns [`AccountStoreError`] when the lock is poisoned.
    pub fn is_empty(&self) -> AccountStoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl AccountStatements for InMemoryAccountState {
    fn id_exists(&mut self, id: AccountId) -> AccountStoreResult<bool> {
        Ok(self.accounts.contains_key(&id))
    }

    fn name_exists(&mut self, name: &AccountName) -> AccountStoreResult<bool> {
        Ok(self.name_index.contains_key(name))
    }

    fn email_exists(&mut self, email: &EmailAddress) -> AccountStoreResult<bool> {
        Ok(self.email_index.contains_key(email))
    }

    fn insert(&mut self, account: &Account) -> AccountStoreResult<()> {
        if self.accounts.contains_key(&account.id())
            || self.name_index.contains_key(account.name())
            || self.email_index.contains_key(account.email())
        {
            return Err(AccountStoreError::persistence(std::io::Error::other(
                format!("unique violation inserting account {}", account.id()),
            )));
        }

        self.name_index.insert(account.name().clone(), account.id());
        self.email_index.insert(account.email().clone(), account.id());
        self.accounts.insert(account.id(), account.clone());
        Ok(())
    }

    fn update_name(&mut self, old: &AccountName, new: &AccountName) -> AccountStoreResult<u64> {
        let Some(id) = self.name_index.remove(old) else {
            return Ok(0);
        };
        self.name_index.insert(new.clone(), id);
        if let Some(account) = self.accounts.get_mut(&id) {
            account.rename(new.clone());
        }
        Ok(1)
    }

    fn update_email(
        &mut self,
        old: &EmailAddress,
        new: &EmailAddress,
    ) -> AccountStoreResult<u64> {
        let Some(id) = self.email_index.remove(old) else {
            return Ok(0);
        };
        self.email_index.insert(new.clone(), id);
        if let Some(account) = self.accounts.get_mut(&id) {
            account.change_email(new.clone());
        }
        Ok(1)
    }

    fn update_password(
        &mut self,
        id: AccountId,
        old: &PasswordDigest,
        new: &PasswordDigest,
    ) -> AccountStoreResult<u64> {
        match self.accounts.get_mut(&id) {
            Some(account) if account.password() == old => {
                account.change_password(new.clone());
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn transact<T, F>(&self, work: F) -> AccountStoreResult<T>
    where
        F: FnOnce(&mut dyn AccountStatements) -> AccountStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let mut state = self.state.write().map_err(|err| {
            AccountStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;

        let snapshot = state.clone();
        let result = work(&mut *state);
        if result.is_err() {
            *state = snapshot;
        }
        result
    }

    async fn find_by_id(&self, id: AccountId) -> AccountStoreResult<Option<Account>> {
        let state = self.state.read().map_err(|err| {
            AccountStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.accounts.get(&id).cloned())
    }
}
