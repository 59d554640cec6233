//! In-memory audit store for tests and local development.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::audit::{
    domain::AuditRecord,
    ports::{AuditStore, AuditStoreError, AuditStoreResult},
};
use crate::gateway::domain::CorrelationId;

/// Thread-safe in-memory audit store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuditStore {
    records: Arc<RwLock<Vec<AuditRecord>>>,
}

impl InMemoryAuditStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AuditStoreError`] when the lock is poisoned.
    pub fn records(&self) -> AuditStoreResult<Vec<AuditRecord>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records.clone())
    }
}

fn poisoned(err: impl ToString) -> AuditStoreError {
    AuditStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AuditStore for InMemoryAuditStore {
    async fn append(&self, record: &AuditRecord) -> AuditStoreResult<()> {
        let mut records = self.records.write().map_err(poisoned)?;
        records.push(record.clone());
        Ok(())
    }

    async fn find_by_correlation_id(
        &self,
        correlation_id: CorrelationId,
    ) -> AuditStoreResult<Vec<AuditRecord>> {
        let records = self.records.read().map_err(poisoned)?;
        Ok(records
            .iter()
            .filter(|record| record.correlation_id() == correlation_id)
            .cloned()
            .collect())
    }
}
