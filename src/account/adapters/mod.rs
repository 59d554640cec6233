//! Adapter implementations of the account repository port.

pub mod memory;
pub mod postgres;
