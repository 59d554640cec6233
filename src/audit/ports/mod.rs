//! Port contracts for audit persistence.

pub mod store;

pub use store::{AuditStore, AuditStoreError, AuditStoreResult};
