//! Adapter implementations of the audit store port.

pub mod memory;
pub mod postgres;
