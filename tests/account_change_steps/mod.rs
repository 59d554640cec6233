//! Step definitions for account change scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
