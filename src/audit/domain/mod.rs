//! Domain model for audit records.

mod record;
mod status;

pub use record::{AuditRecord, PersistedAuditData};
pub use status::{AuditStatus, ParseAuditStatusError};
