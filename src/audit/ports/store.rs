//! Append-only audit store port.

use crate::audit::domain::AuditRecord;
use crate::gateway::domain::CorrelationId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for audit store operations.
pub type AuditStoreResult<T> = Result<T, AuditStoreError>;

/// Append-only audit persistence contract.
///
/// Records are never updated or deleted through this port.
#[async_trait]
pub trait AuditStore: Send + Sync {
    /// Appends one record.
    ///
    /// # Errors
    ///
    /// Returns [`AuditStoreError`] when the record cannot be written.
    async fn append(&self, record: &AuditRecord) -> AuditStoreResult<()>;

    /// Returns every record for a correlation id in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AuditStoreError`] when the lookup fails.
    async fn find_by_correlation_id(
        &self,
        correlation_id: CorrelationId,
    ) -> AuditStoreResult<Vec<AuditRecord>>;
}

/// Errors returned by audit store implementations.
#[derive(Debug, Clone, Error)]
pub enum AuditStoreError {
    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuditStoreError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
