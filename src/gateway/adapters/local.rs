//! Backend executing commands against the gateway-owned store.

use crate::account::{
    ports::AccountRepository,
    services::{AccountService, AccountServiceError, messages},
};
use crate::gateway::{
    domain::{BackingFault, BackingReply, GatewayCommand, RequestEnvelope},
    ports::Backend,
};
use crate::order::{
    ports::OrderRepository,
    services::{ORDER_PLACED, OrderService, OrderServiceError},
};
use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;

/// Runs account and order commands through the local mutation protocols.
pub struct LocalBackend<A, O, C>
where
    A: AccountRepository,
    O: OrderRepository,
    C: Clock + Send + Sync,
{
    accounts: AccountService<A, C>,
    orders: OrderService<O, C>,
}

impl<A, O, C> LocalBackend<A, O, C>
where
    A: AccountRepository,
    O: OrderRepository,
    C: Clock + Send + Sync,
{
    /// Creates a backend over the account and order services.
    #[must_use]
    pub const fn new(accounts: AccountService<A, C>, orders: OrderService<O, C>) -> Self {
        Self { accounts, orders }
    }
}

fn account_fault(err: AccountServiceError) -> BackingFault {
    match err {
        AccountServiceError::Domain(inner) => BackingFault::domain(inner),
        AccountServiceError::Store(inner) => BackingFault::store(inner),
    }
}

fn order_fault(err: OrderServiceError) -> BackingFault {
    match err {
        OrderServiceError::Domain(inner) => BackingFault::domain(inner),
        OrderServiceError::Account(inner) => BackingFault::domain(inner),
        OrderServiceError::Store(inner) => BackingFault::store(inner),
    }
}

#[async_trait]
impl<A, O, C> Backend for LocalBackend<A, O, C>
where
    A: AccountRepository,
    O: OrderRepository,
    C: Clock + Send + Sync,
{
    async fn dispatch(
        &self,
        command: GatewayCommand,
        _envelope: &RequestEnvelope,
    ) -> Result<BackingReply, BackingFault> {
        match command {
            GatewayCommand::CreateAccount(request) => {
                let (outcome, account) =
                    self.accounts.create(request).await.map_err(account_fault)?;
                let data = json!({
                    "id": account.id(),
                    "name": account.name(),
                    "email": account.email(),
                });
                Ok(BackingReply::from_outcome(
                    outcome,
                    messages::ACCOUNT_CREATED,
                    Some(data),
                ))
            }
            GatewayCommand::ChangeAccountName(request) => {
                let outcome = self
                    .accounts
                    .change_name(request)
                    .await
                    .map_err(account_fault)?;
                Ok(BackingReply::from_outcome(outcome, messages::NAME_CHANGED, None))
            }
            GatewayCommand::ChangeAccountEmail(request) => {
                let outcome = self
                    .accounts
                    .change_email(request)
                    .await
                    .map_err(account_fault)?;
                Ok(BackingReply::from_outcome(outcome, messages::EMAIL_CHANGED, None))
            }
            GatewayCommand::ChangeAccountPassword(request) => {
                let outcome = self
                    .accounts
                    .change_password(request)
                    .await
                    .map_err(account_fault)?;
                Ok(BackingReply::from_outcome(
                    outcome,
                    messages::PASSWORD_CHANGED,
                    None,
                ))
            }
            GatewayCommand::PlaceOrder(request) => {
                let (outcome, order) = self.orders.place(request).await.map_err(order_fault)?;
                let data = json!({
                    "order_id": order.id(),
                    "placed_at": order.placed_at(),
                });
                Ok(BackingReply::from_outcome(outcome, ORDER_PLACED, Some(data)))
            }
        }
    }
}
