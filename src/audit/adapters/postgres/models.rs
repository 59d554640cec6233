//! Diesel row models for audit persistence.

use super::schema::audit_records;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for audit records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = audit_records)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AuditRecordRow {
    /// Surrogate key.
    pub id: i64,
    /// Time the stage was recorded.
    pub recorded_at: DateTime<Utc>,
    /// HTTP method.
    pub method: String,
    /// Endpoint path.
    pub endpoint: String,
    /// Payload snapshot.
    pub snapshot: Value,
    /// Stage-status string.
    pub status: String,
    /// Correlation id.
    pub correlation_id: uuid::Uuid,
}

/// Insert model for audit records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = audit_records)]
pub struct NewAuditRecordRow {
    /// Time the stage was recorded.
    pub recorded_at: DateTime<Utc>,
    /// HTTP method.
    pub method: String,
    /// Endpoint path.
    pub endpoint: String,
    /// Payload snapshot.
    pub snapshot: Value,
    /// Stage-status string.
    pub status: String,
    /// Correlation id.
    pub correlation_id: uuid::Uuid,
}
