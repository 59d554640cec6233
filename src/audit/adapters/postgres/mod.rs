//! `PostgreSQL` adapters for audit persistence.

mod models;
mod schema;
mod store;

pub use store::{AuditPgPool, PostgresAuditStore};
