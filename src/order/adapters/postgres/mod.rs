//! `PostgreSQL` adapters for order persistence.

mod models;
mod repository;

pub use repository::PostgresOrderRepository;
