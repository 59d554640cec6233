//! Order placement against the gateway-owned store.
//!
//! Placing an order is a create-with-unique-key protocol on the order
//! identifier. Layout mirrors [`crate::account`].

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
