//! In-memory audit store.

mod store;

pub use store::InMemoryAuditStore;
