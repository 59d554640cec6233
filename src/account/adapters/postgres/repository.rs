//! `PostgreSQL` repository implementation for accounts.

use super::models::{AccountRow, PresenceRow};
use crate::account::{
    domain::{
        Account, AccountId, AccountName, EmailAddress, PasswordDigest, PersistedAccountData,
    },
    ports::{AccountRepository, AccountStatements, AccountStoreError, AccountStoreResult},
};
use crate::config::QueryCatalog;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_types::{BigInt, Text, Timestamptz};
use std::sync::Arc;

/// `PostgreSQL` connection pool type used by account adapters.
pub type AccountPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed account repository.
///
/// Each unit of work runs in its own `SERIALIZABLE` transaction. Concurrent
/// protocols touching the same values either serialise cleanly or one of
/// them fails with a serialization error, which surfaces as a persistence
/// error and is not retried here.
#[derive(Debug, Clone)]
pub struct PostgresAccountRepository {
    pool: AccountPgPool,
    queries: Arc<QueryCatalog>,
}

impl PostgresAccountRepository {
    /// Creates a new repository from a connection pool and statement texts.
    #[must_use]
    pub const fn new(pool: AccountPgPool, queries: Arc<QueryCatalog>) -> Self {
        Self { pool, queries }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AccountStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AccountStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AccountStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AccountStoreError::persistence)?
    }
}

struct PgAccountStatements<'c> {
    connection: &'c mut PgConnection,
    queries: &'c QueryCatalog,
}

impl PgAccountStatements<'_> {
    fn text_exists(&mut self, sql: &str, value: &str) -> AccountStoreResult<bool> {
        let row = diesel::sql_query(sql)
            .bind::<Text, _>(value)
            .get_result::<PresenceRow>(self.connection)?;
        Ok(row.present)
    }
}

fn affected(count: usize) -> AccountStoreResult<u64> {
    u64::try_from(count).map_err(AccountStoreError::persistence)
}

impl AccountStatements for PgAccountStatements<'_> {
    fn id_exists(&mut self, id: AccountId) -> AccountStoreResult<bool> {
        let row = diesel::sql_query(&self.queries.account_id_exists)
            .bind::<BigInt, _>(id.value())
            .get_result::<PresenceRow>(self.connection)?;
        Ok(row.present)
    }

    fn name_exists(&mut self, name: &AccountName) -> AccountStoreResult<bool> {
        let sql = self.queries.account_name_exists.clone();
        self.text_exists(&sql, name.as_str())
    }

    fn email_exists(&mut self, email: &EmailAddress) -> AccountStoreResult<bool> {
        let sql = self.queries.account_email_exists.clone();
        self.text_exists(&sql, email.as_str())
    }

    fn insert(&mut self, account: &Account) -> AccountStoreResult<()> {
        diesel::sql_query(&self.queries.account_insert)
            .bind::<BigInt, _>(account.id().value())
            .bind::<Text, _>(account.name().as_str())
            .bind::<Text, _>(account.email().as_str())
            .bind::<Text, _>(account.password().as_str())
            .bind::<Timestamptz, _>(account.created_at())
            .execute(self.connection)?;
        Ok(())
    }

    fn update_name(&mut self, old: &AccountName, new: &AccountName) -> AccountStoreResult<u64> {
        let count = diesel::sql_query(&self.queries.account_update_name)
            .bind::<Text, _>(old.as_str())
            .bind::<Text, _>(new.as_str())
            .execute(self.connection)?;
        affected(count)
    }

    fn update_email(
        &mut self,
        old: &EmailAddress,
        new: &EmailAddress,
    ) -> AccountStoreResult<u64> {
        let count = diesel::sql_query(&self.queries.account_update_email)
            .bind::<Text, _>(old.as_str())
            .bind::<Text, _>(new.as_str())
            .execute(self.connection)?;
        affected(count)
    }

    fn update_password(
        &mut self,
        id: AccountId,
        old: &PasswordDigest,
        new: &PasswordDigest,
    ) -> AccountStoreResult<u64> {
        let count = diesel::sql_query(&self.queries.account_update_password)
            .bind::<BigInt, _>(id.value())
            .bind::<Text, _>(old.as_str())
            .bind::<Text, _>(new.as_str())
            .execute(self.connection)?;
        affected(count)
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn transact<T, F>(&self, work: F) -> AccountStoreResult<T>
    where
        F: FnOnce(&mut dyn AccountStatements) -> AccountStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let queries = Arc::clone(&self.queries);
        self.run_blocking(move |connection| {
            connection
                .build_transaction()
                .serializable()
                .run(|tx_conn| {
                    let mut statements = PgAccountStatements {
                        connection: tx_conn,
                        queries: &queries,
                    };
                    work(&mut statements)
                })
        })
        .await
    }

    async fn find_by_id(&self, id: AccountId) -> AccountStoreResult<Option<Account>> {
        let queries = Arc::clone(&self.queries);
        self.run_blocking(move |connection| {
            let row = diesel::sql_query(&queries.account_find_by_id)
                .bind::<BigInt, _>(id.value())
                .get_result::<AccountRow>(connection)
                .optional()?;
            row.map(row_to_account).transpose()
        })
        .await
    }
}

fn row_to_account(row: AccountRow) -> AccountStoreResult<Account> {
    let AccountRow {
        id,
        name,
        email,
        password_digest,
        created_at,
    } = row;

    let data = PersistedAccountData {
        id: AccountId::new(id).map_err(AccountStoreError::invalid_persisted_data)?,
        name: AccountName::new(name).map_err(AccountStoreError::invalid_persisted_data)?,
        email: EmailAddress::new(email).map_err(AccountStoreError::invalid_persisted_data)?,
        password: PasswordDigest::from_stored(password_digest),
        created_at,
    };
    Ok(Account::from_persisted(data))
}
