//! Error types for order domain validation.

use thiserror::Error;

/// Errors returned while constructing order domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderDomainError {
    /// The order identifier is zero or negative.
    #[error("invalid order id {0}, expected a positive integer")]
    InvalidOrderId(i64),

    /// The product identifier is zero or negative.
    #[error("invalid product id {0}, expected a positive integer")]
    InvalidProductId(i64),

    /// The quantity is outside the accepted range.
    #[error("quantity {0} is outside 1..={max}", max = super::order::MAX_QUANTITY)]
    InvalidQuantity(i64),

    /// A delivery field is empty after trimming.
    #[error("delivery field '{0}' must not be empty")]
    EmptyDeliveryField(&'static str),
}
