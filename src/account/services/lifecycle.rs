//! Account lifecycle service.
//!
//! Every mutating operation builds a protocol from [`crate::mutation`] and
//! runs it inside one [`AccountRepository::transact`] scope.

use super::messages;
use crate::account::{
    domain::{
        Account, AccountDomainError, AccountId, AccountName, EmailAddress, PasswordDigest,
    },
    ports::{AccountRepository, AccountStatements, AccountStoreError},
};
use crate::mutation::{ChangeProtocol, CreateProtocol, MutationOutcome, ReplaceProtocol};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// Validated payload for `POST /accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateAccountRequest {
    /// Caller-chosen account identifier.
    pub id: i64,
    /// Unique display name.
    pub name: String,
    /// Unique email address.
    pub email: String,
    /// Plaintext password; hashed before it reaches the store.
    pub password: String,
}

/// Validated payload for `PUT /accounts/name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangeNameRequest {
    /// Name the caller currently holds.
    pub old_name: String,
    /// Replacement name.
    pub new_name: String,
}

/// Validated payload for `PUT /accounts/email`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangeEmailRequest {
    /// Email address the caller currently holds.
    pub old_email: String,
    /// Replacement email address.
    pub new_email: String,
}

/// Validated payload for `PUT /accounts/password`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangePasswordRequest {
    /// Account whose password changes.
    pub id: i64,
    /// Current plaintext password.
    pub old_password: String,
    /// Replacement plaintext password.
    pub new_password: String,
}

/// Service-level errors for account operations.
#[derive(Debug, Error)]
pub enum AccountServiceError {
    /// Input could not be turned into domain values.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),
    /// The store failed.
    #[error(transparent)]
    Store(#[from] AccountStoreError),
}

/// Result type for account service operations.
pub type AccountServiceResult<T> = Result<T, AccountServiceError>;

/// Account creation and change orchestration service.
#[derive(Clone)]
pub struct AccountService<R, C>
where
    R: AccountRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> AccountService<R, C>
where
    R: AccountRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new account service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates an account when its identifier, email and name are all free.
    ///
    /// The identifier is checked first, then the email, then the name; the
    /// first taken value is reported.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::Domain`] when a field fails domain
    /// validation, or [`AccountServiceError::Store`] when the store fails.
    pub async fn create(
        &self,
        request: CreateAccountRequest,
    ) -> AccountServiceResult<(MutationOutcome, Account)> {
        let CreateAccountRequest {
            id,
            name,
            email,
            password,
        } = request;

        let account = Account::new(
            AccountId::new(id)?,
            AccountName::new(name)?,
            EmailAddress::new(email)?,
            PasswordDigest::from_plaintext(&password)?,
            &*self.clock,
        );

        let candidate = account.clone();
        let outcome = self
            .repository
            .transact(move |scope| create_protocol(candidate).execute(scope))
            .await?;
        tracing::debug!(account_id = %account.id(), %outcome, "account create finished");
        Ok((outcome, account))
    }

    /// Replaces an account name.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError`] on invalid names or store failure.
    pub async fn change_name(
        &self,
        request: ChangeNameRequest,
    ) -> AccountServiceResult<MutationOutcome> {
        let old = AccountName::new(request.old_name)?;
        let new = AccountName::new(request.new_name)?;
        let outcome = self
            .repository
            .transact(move |scope| change_name_protocol(old, new).execute(scope))
            .await?;
        Ok(outcome)
    }

    /// Replaces an account email address.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError`] on invalid addresses or store failure.
    pub async fn change_email(
        &self,
        request: ChangeEmailRequest,
    ) -> AccountServiceResult<MutationOutcome> {
        let old = EmailAddress::new(request.old_email)?;
        let new = EmailAddress::new(request.new_email)?;
        let outcome = self
            .repository
            .transact(move |scope| change_email_protocol(old, new).execute(scope))
            .await?;
        Ok(outcome)
    }

    /// Replaces a password after confirming the current one.
    ///
    /// A missing account and a wrong password are indistinguishable to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError`] on invalid input or store failure.
    pub async fn change_password(
        &self,
        request: ChangePasswordRequest,
    ) -> AccountServiceResult<MutationOutcome> {
        let id = AccountId::new(request.id)?;
        let old = PasswordDigest::from_plaintext(&request.old_password)?;
        let new = PasswordDigest::from_plaintext(&request.new_password)?;
        let outcome = self
            .repository
            .transact(move |scope| change_password_protocol(id, old, new).execute(scope))
            .await?;
        Ok(outcome)
    }

    /// Finds an account by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::Store`] when the lookup fails.
    pub async fn find_by_id(&self, id: AccountId) -> AccountServiceResult<Option<Account>> {
        Ok(self.repository.find_by_id(id).await?)
    }
}

fn create_protocol<'a, S>(account: Account) -> CreateProtocol<'a, S, AccountStoreError>
where
    S: AccountStatements + ?Sized,
{
    let id = account.id();
    let email = account.email().clone();
    let name = account.name().clone();
    CreateProtocol::new(move |scope: &mut S| scope.insert(&account))
        .require_unique(messages::ID_IN_USE, move |scope: &mut S| scope.id_exists(id))
        .require_unique(messages::EMAIL_IN_USE, move |scope: &mut S| {
            scope.email_exists(&email)
        })
        .require_unique(messages::NAME_IN_USE, move |scope: &mut S| {
            scope.name_exists(&name)
        })
}

fn change_name_protocol<'a, S>(
    old: AccountName,
    new: AccountName,
) -> ChangeProtocol<'a, S, AccountStoreError>
where
    S: AccountStatements + ?Sized,
{
    let (old_key, new_key) = (old.clone(), new.clone());
    ChangeProtocol::new(
        old == new,
        move |scope: &mut S| scope.name_exists(&old_key),
        move |scope: &mut S| scope.name_exists(&new_key),
        move |scope: &mut S| scope.update_name(&old, &new),
    )
    .not_found_message(messages::OLD_NAME_NOT_FOUND)
    .conflict_message(messages::NEW_NAME_IN_USE)
}

fn change_email_protocol<'a, S>(
    old: EmailAddress,
    new: EmailAddress,
) -> ChangeProtocol<'a, S, AccountStoreError>
where
    S: AccountStatements + ?Sized,
{
    let (old_key, new_key) = (old.clone(), new.clone());
    ChangeProtocol::new(
        old == new,
        move |scope: &mut S| scope.email_exists(&old_key),
        move |scope: &mut S| scope.email_exists(&new_key),
        move |scope: &mut S| scope.update_email(&old, &new),
    )
    .not_found_message(messages::OLD_EMAIL_NOT_FOUND)
    .conflict_message(messages::NEW_EMAIL_IN_USE)
}

fn change_password_protocol<'a, S>(
    id: AccountId,
    old: PasswordDigest,
    new: PasswordDigest,
) -> ReplaceProtocol<'a, S, AccountStoreError>
where
    S: AccountStatements + ?Sized,
{
    ReplaceProtocol::new(messages::PASSWORD_REJECTED, move |scope: &mut S| {
        scope.update_password(id, &old, &new)
    })
}
