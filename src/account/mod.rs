//! Gateway-owned account storage and uniqueness-governed mutations.
//!
//! Account creation and name/email changes run through the protocols in
//! [`crate::mutation`], executed inside one repository transaction each.
//! The module follows the hexagonal layout used across the crate:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
