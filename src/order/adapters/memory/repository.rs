//! In-memory order repository for tests and local development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::order::{
    domain::{Order, OrderId},
    ports::{OrderRepository, OrderStatements, OrderStoreError, OrderStoreResult},
};

/// Thread-safe in-memory order repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    state: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl InMemoryOrderRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> OrderStoreError {
    OrderStoreError::persistence(std::io::Error::other(err.to_string()))
}

impl OrderStatements for HashMap<OrderId, Order> {
    fn id_exists(&mut self, id: OrderId) -> OrderStoreResult<bool> {
        Ok(self.contains_key(&id))
    }

    fn insert(&mut self, order: &Order) -> OrderStoreResult<()> {
        if self.contains_key(&order.id()) {
            return Err(OrderStoreError::persistence(std::io::Error::other(
                format!("unique violation inserting order {}", order.id()),
            )));
        }
        HashMap::insert(self, order.id(), order.clone());
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn transact<T, F>(&self, work: F) -> OrderStoreResult<T>
    where
        F: FnOnce(&mut dyn OrderStatements) -> OrderStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let mut state = self.state.write().map_err(poisoned)?;
        let snapshot = state.clone();
        let result = work(&mut *state);
        if result.is_err() {
            *state = snapshot;
        }
        result
    }

    async fn find_by_id(&self, id: OrderId) -> OrderStoreResult<Option<Order>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.get(&id).cloned())
    }
}
