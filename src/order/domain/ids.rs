//! Identifier types for orders.

use super::OrderDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-chosen order identifier, unique across all orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    /// Creates an order identifier.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDomainError::InvalidOrderId`] for zero or negative
    /// values.
    pub const fn new(value: i64) -> Result<Self, OrderDomainError> {
        if value <= 0 {
            return Err(OrderDomainError::InvalidOrderId(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalogue product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Creates a product identifier.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDomainError::InvalidProductId`] for zero or negative
    /// values.
    pub const fn new(value: i64) -> Result<Self, OrderDomainError> {
        if value <= 0 {
            return Err(OrderDomainError::InvalidProductId(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}
