//! `PostgreSQL` repository implementation for orders.

use super::models::{OrderRow, PresenceRow};
use crate::account::{adapters::postgres::AccountPgPool, domain::AccountId};
use crate::config::QueryCatalog;
use crate::order::{
    domain::{Delivery, Order, OrderId, PersistedOrderData, ProductId, Quantity},
    ports::{OrderRepository, OrderStatements, OrderStoreError, OrderStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Text, Timestamptz};
use std::sync::Arc;

/// `PostgreSQL`-backed order repository sharing the account store pool.
#[derive(Debug, Clone)]
pub struct PostgresOrderRepository {
    pool: AccountPgPool,
    queries: Arc<QueryCatalog>,
}

impl PostgresOrderRepository {
    /// Creates a new repository from a connection pool and statement texts.
    #[must_use]
    pub const fn new(pool: AccountPgPool, queries: Arc<QueryCatalog>) -> Self {
        Self { pool, queries }
    }

    async fn run_blocking<F, T>(&self, f: F) -> OrderStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> OrderStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(OrderStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(OrderStoreError::persistence)?
    }
}

struct PgOrderStatements<'c> {
    connection: &'c mut PgConnection,
    queries: &'c QueryCatalog,
}

impl OrderStatements for PgOrderStatements<'_> {
    fn id_exists(&mut self, id: OrderId) -> OrderStoreResult<bool> {
        let row = diesel::sql_query(&self.queries.order_id_exists)
            .bind::<BigInt, _>(id.value())
            .get_result::<PresenceRow>(self.connection)?;
        Ok(row.present)
    }

    fn insert(&mut self, order: &Order) -> OrderStoreResult<()> {
        let delivery = order.delivery();
        diesel::sql_query(&self.queries.order_insert)
            .bind::<BigInt, _>(order.id().value())
            .bind::<BigInt, _>(order.account_id().value())
            .bind::<BigInt, _>(order.product_id().value())
            .bind::<BigInt, _>(order.quantity().value())
            .bind::<Text, _>(delivery.recipient())
            .bind::<Text, _>(delivery.address())
            .bind::<Text, _>(delivery.phone())
            .bind::<Timestamptz, _>(order.placed_at())
            .execute(self.connection)?;
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn transact<T, F>(&self, work: F) -> OrderStoreResult<T>
    where
        F: FnOnce(&mut dyn OrderStatements) -> OrderStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let queries = Arc::clone(&self.queries);
        self.run_blocking(move |connection| {
            connection
                .build_transaction()
                .serializable()
                .run(|tx_conn| {
                    let mut statements = PgOrderStatements {
                        connection: tx_conn,
                        queries: &queries,
                    };
                    work(&mut statements)
                })
        })
        .await
    }

    async fn find_by_id(&self, id: OrderId) -> OrderStoreResult<Option<Order>> {
        let queries = Arc::clone(&self.queries);
        self.run_blocking(move |connection| {
            let row = diesel::sql_query(&queries.order_find_by_id)
                .bind::<BigInt, _>(id.value())
                .get_result::<OrderRow>(connection)
                .optional()?;
            row.map(row_to_order).transpose()
        })
        .await
    }
}

fn row_to_order(row: OrderRow) -> OrderStoreResult<Order> {
    let OrderRow {
        id,
        account_id,
        product_id,
        quantity,
        recipient,
        address,
        phone,
        placed_at,
    } = row;

    let data = PersistedOrderData {
        id: OrderId::new(id).map_err(OrderStoreError::invalid_persisted_data)?,
        account_id: AccountId::new(account_id)
            .map_err(OrderStoreError::invalid_persisted_data)?,
        product_id: ProductId::new(product_id).map_err(OrderStoreError::invalid_persisted_data)?,
        quantity: Quantity::new(quantity).map_err(OrderStoreError::invalid_persisted_data)?,
        delivery: Delivery::new(recipient, address, phone)
            .map_err(OrderStoreError::invalid_persisted_data)?,
        placed_at,
    };
    Ok(Order::from_persisted(data))
}
