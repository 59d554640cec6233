//! Append-only audit trail of gateway pipeline stages.
//!
//! Every request that reaches the gateway leaves records keyed by its
//! correlation id: `operation started` before the backing call and exactly
//! one of `operation completed` or `operation failed: <reason>` after it.
//! Rejected requests leave a single `validation failed: <reasons>` record.
//!
//! Writing is best effort. [`services::AuditSink`] logs and swallows store
//! failures so the audit trail never changes the caller's result.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
