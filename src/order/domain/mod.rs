//! Domain model for orders.

mod error;
mod ids;
mod order;

pub use error::OrderDomainError;
pub use ids::{OrderId, ProductId};
pub use order::{Delivery, MAX_QUANTITY, Order, PersistedOrderData, Quantity};
