//! Order placement service.

use crate::account::domain::{AccountDomainError, AccountId};
use crate::mutation::{CreateProtocol, MutationOutcome};
use crate::order::{
    domain::{Delivery, Order, OrderDomainError, OrderId, ProductId, Quantity},
    ports::{OrderRepository, OrderStatements, OrderStoreError},
};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

/// The requested order identifier is taken.
pub const ORDER_ID_IN_USE: &str = "This Order ID is already in use.";
/// Order placement succeeded.
pub const ORDER_PLACED: &str = "Order placed.";

/// Validated payload for `POST /orders`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlaceOrderRequest {
    /// Caller-chosen order identifier.
    pub order_id: i64,
    /// Ordering account.
    pub account_id: i64,
    /// Ordered product.
    pub product_id: i64,
    /// Ordered quantity.
    pub quantity: i64,
    /// Recipient name.
    pub recipient: String,
    /// Shipping address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
}

/// Service-level errors for order placement.
#[derive(Debug, Error)]
pub enum OrderServiceError {
    /// Order fields could not be turned into domain values.
    #[error(transparent)]
    Domain(#[from] OrderDomainError),
    /// The account identifier is invalid.
    #[error(transparent)]
    Account(#[from] AccountDomainError),
    /// The store failed.
    #[error(transparent)]
    Store(#[from] OrderStoreError),
}

/// Result type for order service operations.
pub type OrderServiceResult<T> = Result<T, OrderServiceError>;

/// Order placement orchestration service.
#[derive(Clone)]
pub struct OrderService<R, C>
where
    R: OrderRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> OrderService<R, C>
where
    R: OrderRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new order service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Places an order when its identifier is free.
    ///
    /// # Errors
    ///
    /// Returns [`OrderServiceError`] when a field fails domain validation or
    /// the store fails.
    pub async fn place(
        &self,
        request: PlaceOrderRequest,
    ) -> OrderServiceResult<(MutationOutcome, Order)> {
        let PlaceOrderRequest {
            order_id,
            account_id,
            product_id,
            quantity,
            recipient,
            address,
            phone,
        } = request;

        let order = Order::new(
            OrderId::new(order_id)?,
            AccountId::new(account_id)?,
            ProductId::new(product_id)?,
            Quantity::new(quantity)?,
            Delivery::new(recipient, address, phone)?,
            &*self.clock,
        );

        let candidate = order.clone();
        let outcome = self
            .repository
            .transact(move |scope| place_protocol(candidate).execute(scope))
            .await?;
        tracing::debug!(order_id = %order.id(), %outcome, "order placement finished");
        Ok((outcome, order))
    }

    /// Finds an order by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`OrderServiceError::Store`] when the lookup fails.
    pub async fn find_by_id(&self, id: OrderId) -> OrderServiceResult<Option<Order>> {
        Ok(self.repository.find_by_id(id).await?)
    }
}

fn place_protocol<'a, S>(order: Order) -> CreateProtocol<'a, S, OrderStoreError>
where
    S: OrderStatements + ?Sized,
{
    let id = order.id();
    CreateProtocol::new(move |scope: &mut S| scope.insert(&order))
        .require_unique(ORDER_ID_IN_USE, move |scope: &mut S| scope.id_exists(id))
}
