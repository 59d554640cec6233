//! Order aggregate.

use super::{OrderDomainError, OrderId, ProductId};
use crate::account::domain::AccountId;
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Largest quantity accepted on a single order line.
pub const MAX_QUANTITY: i64 = 100;

/// Ordered quantity in `1..=MAX_QUANTITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(i64);

impl Quantity {
    /// Creates a quantity.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDomainError::InvalidQuantity`] outside the accepted
    /// range.
    pub const fn new(value: i64) -> Result<Self, OrderDomainError> {
        if value < 1 || value > MAX_QUANTITY {
            return Err(OrderDomainError::InvalidQuantity(value));
        }
        Ok(Self(value))
    }

    /// Returns the raw quantity.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

/// Where and to whom an order is shipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    recipient: String,
    address: String,
    phone: String,
}

impl Delivery {
    /// Creates delivery details, trimming each field.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDomainError::EmptyDeliveryField`] naming the first
    /// blank field.
    pub fn new(
        recipient: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, OrderDomainError> {
        Ok(Self {
            recipient: non_blank("recipient", recipient.into())?,
            address: non_blank("address", address.into())?,
            phone: non_blank("phone", phone.into())?,
        })
    }

    /// Returns the recipient name.
    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Returns the shipping address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the contact phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }
}

fn non_blank(field: &'static str, value: String) -> Result<String, OrderDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(OrderDomainError::EmptyDeliveryField(field));
    }
    Ok(trimmed.to_owned())
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    account_id: AccountId,
    product_id: ProductId,
    quantity: Quantity,
    delivery: Delivery,
    placed_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedOrderData {
    /// Persisted order identifier.
    pub id: OrderId,
    /// Ordering account.
    pub account_id: AccountId,
    /// Ordered product.
    pub product_id: ProductId,
    /// Ordered quantity.
    pub quantity: Quantity,
    /// Delivery details.
    pub delivery: Delivery,
    /// Placement timestamp.
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Creates an order stamped with the current time.
    #[must_use]
    pub fn new(
        id: OrderId,
        account_id: AccountId,
        product_id: ProductId,
        quantity: Quantity,
        delivery: Delivery,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            account_id,
            product_id,
            quantity,
            delivery,
            placed_at: clock.utc(),
        }
    }

    /// Reconstructs an order from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedOrderData) -> Self {
        Self {
            id: data.id,
            account_id: data.account_id,
            product_id: data.product_id,
            quantity: data.quantity,
            delivery: data.delivery,
            placed_at: data.placed_at,
        }
    }

    /// Returns the order identifier.
    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    /// Returns the ordering account.
    #[must_use]
    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Returns the ordered product.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the ordered quantity.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the delivery details.
    #[must_use]
    pub const fn delivery(&self) -> &Delivery {
        &self.delivery
    }

    /// Returns the placement timestamp.
    #[must_use]
    pub const fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}
