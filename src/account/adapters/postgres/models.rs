//! Diesel row models for account persistence.
//!
//! Statements come from the configurable query catalog, so rows are mapped
//! by column name through `QueryableByName` rather than a `table!` schema.

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

/// Query result row for account records.
#[derive(Debug, Clone, QueryableByName)]
pub struct AccountRow {
    /// Account identifier.
    #[diesel(sql_type = BigInt)]
    pub id: i64,
    /// Unique account name.
    #[diesel(sql_type = Text)]
    pub name: String,
    /// Unique email address.
    #[diesel(sql_type = Text)]
    pub email: String,
    /// Hex SHA-256 password digest.
    #[diesel(sql_type = Text)]
    pub password_digest: String,
    /// Creation timestamp.
    #[diesel(sql_type = Timestamptz)]
    pub created_at: DateTime<Utc>,
}
