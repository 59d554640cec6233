//! `PostgreSQL` adapters for account persistence.

mod models;
mod repository;

pub use repository::{AccountPgPool, PostgresAccountRepository};
