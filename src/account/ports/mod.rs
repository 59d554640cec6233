//! Port contracts for account persistence.

pub mod repository;

pub use repository::{
    AccountRepository, AccountStatements, AccountStoreError, AccountStoreResult,
};
