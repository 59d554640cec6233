//! Unit tests for the gateway module.

mod http_tests;
