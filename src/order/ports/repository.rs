//! Repository port for order persistence.

use crate::order::domain::{Order, OrderId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for order store operations.
pub type OrderStoreResult<T> = Result<T, OrderStoreError>;

/// Statements available inside an order transactional scope.
pub trait OrderStatements {
    /// Returns `true` when an order with this identifier exists.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStoreError`] when the lookup fails.
    fn id_exists(&mut self, id: OrderId) -> OrderStoreResult<bool>;

    /// Inserts a new order row.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStoreError`] when the insert fails.
    fn insert(&mut self, order: &Order) -> OrderStoreResult<()>;
}

/// Order persistence contract.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Runs `work` inside a single transactional scope.
    ///
    /// # Errors
    ///
    /// Returns the error raised by `work`, or [`OrderStoreError`] when the
    /// scope cannot be opened or committed.
    async fn transact<T, F>(&self, work: F) -> OrderStoreResult<T>
    where
        F: FnOnce(&mut dyn OrderStatements) -> OrderStoreResult<T> + Send + 'static,
        T: Send + 'static;

    /// Finds an order by identifier.
    async fn find_by_id(&self, id: OrderId) -> OrderStoreResult<Option<Order>>;
}

/// Errors returned by order repository implementations.
#[derive(Debug, Clone, Error)]
pub enum OrderStoreError {
    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl OrderStoreError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

impl From<diesel::result::Error> for OrderStoreError {
    fn from(err: diesel::result::Error) -> Self {
        Self::persistence(err)
    }
}
