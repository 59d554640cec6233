//! Diesel row models for order persistence.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Bool, Text, Timestamptz};

/// Single-column result of an existence lookup.
#[derive(Debug, Clone, Copy, QueryableByName)]
pub struct PresenceRow {
    /// Whether a matching row exists.
    #[diesel(sql_type = Bool)]
    pub present: bool,
}

/// Query result row for order records.
#[derive(Debug, Clone, QueryableByName)]
pub struct OrderRow {
    /// Order identifier.
    #[diesel(sql_type = BigInt)]
    pub id: i64,
    /// Ordering account.
    #[diesel(sql_type = BigInt)]
    pub account_id: i64,
    /// Ordered product.
    #[diesel(sql_type = BigInt)]
    pub product_id: i64,
    /// Ordered quantity.
    #[diesel(sql_type = BigInt)]
    pub quantity: i64,
    /// Recipient name.
    #[diesel(sql_type = Text)]
    pub recipient: String,
    /// Shipping address.
    #[diesel(sql_type = Text)]
    pub address: String,
    /// Contact phone number.
    #[diesel(sql_type = Text)]
    pub phone: String,
    /// Placement timestamp.
    #[diesel(sql_type = Timestamptz)]
    pub placed_at: DateTime<Utc>,
}
