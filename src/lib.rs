//! Tollgate: validating, auditing request gateway.
//!
//! Tollgate accepts external requests, checks them against a declared
//! schema, assigns each one a correlation identifier, forwards it to a
//! backing service and records an audit trail of every stage.
//!
//! # Architecture
//!
//! Tollgate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, HTTP, etc.)
//!
//! # Modules
//!
//! - [`validation`]: Two-pass payload validation against static schemas
//! - [`mutation`]: Uniqueness-governed create and change protocols
//! - [`account`]: Gateway-owned accounts
//! - [`order`]: Order placement
//! - [`audit`]: Append-only pipeline audit trail
//! - [`gateway`]: Request pipeline, backends and HTTP front
//! - [`config`]: Startup configuration

pub mod account;
pub mod audit;
pub mod config;
pub mod gateway;
pub mod mutation;
pub mod order;
pub mod validation;
