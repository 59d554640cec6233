//! Adapter implementations of the order repository port.

pub mod memory;
pub mod postgres;
