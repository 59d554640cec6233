//! Port contracts for order persistence.

pub mod repository;

pub use repository::{OrderRepository, OrderStatements, OrderStoreError, OrderStoreResult};
