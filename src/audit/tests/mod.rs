//! Unit tests for the audit module.

mod sink_tests;
mod status_tests;
