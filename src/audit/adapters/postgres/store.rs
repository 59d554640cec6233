//! `PostgreSQL` audit store.

use super::{
    models::{AuditRecordRow, NewAuditRecordRow},
    schema::audit_records,
};
use crate::audit::{
    domain::{AuditRecord, AuditStatus, PersistedAuditData},
    ports::{AuditStore, AuditStoreError, AuditStoreResult},
};
use crate::gateway::domain::CorrelationId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by the audit store.
///
/// Kept separate from the account store pool so audit writes never compete
/// with the primary data path for connections.
pub type AuditPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed append-only audit store.
#[derive(Debug, Clone)]
pub struct PostgresAuditStore {
    pool: AuditPgPool,
}

impl PostgresAuditStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AuditPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AuditStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AuditStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AuditStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AuditStoreError::persistence)?
    }
}

#[async_trait]
impl AuditStore for PostgresAuditStore {
    async fn append(&self, record: &AuditRecord) -> AuditStoreResult<()> {
        let new_row = NewAuditRecordRow {
            recorded_at: record.timestamp(),
            method: record.method().to_owned(),
            endpoint: record.endpoint().to_owned(),
            snapshot: record.snapshot().clone(),
            status: record.status().to_string(),
            correlation_id: record.correlation_id().into_inner(),
        };

        self.run_blocking(move |connection| {
            diesel::insert_into(audit_records::table)
                .values(&new_row)
                .execute(connection)
                .map_err(AuditStoreError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn find_by_correlation_id(
        &self,
        correlation_id: CorrelationId,
    ) -> AuditStoreResult<Vec<AuditRecord>> {
        self.run_blocking(move |connection| {
            let rows = audit_records::table
                .filter(audit_records::correlation_id.eq(correlation_id.into_inner()))
                .order(audit_records::id.asc())
                .select(AuditRecordRow::as_select())
                .load::<AuditRecordRow>(connection)
                .map_err(AuditStoreError::persistence)?;
            rows.into_iter().map(row_to_record).collect()
        })
        .await
    }
}

fn row_to_record(row: AuditRecordRow) -> AuditStoreResult<AuditRecord> {
    let AuditRecordRow {
        recorded_at,
        method,
        endpoint,
        snapshot,
        status,
        correlation_id,
        ..
    } = row;

    let data = PersistedAuditData {
        timestamp: recorded_at,
        method,
        endpoint,
        snapshot,
        status: AuditStatus::try_from(status.as_str())
            .map_err(AuditStoreError::invalid_persisted_data)?,
        correlation_id: CorrelationId::from_uuid(correlation_id),
    };
    Ok(AuditRecord::from_persisted(data))
}
