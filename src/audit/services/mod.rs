//! Best-effort audit recording service.

mod sink;

pub use sink::{AuditSink, DEFAULT_AUDIT_TIMEOUT};
