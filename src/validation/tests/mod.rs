//! Unit tests for schema validation.
