//! Audit record entity.

use super::AuditStatus;
use crate::gateway::domain::{CorrelationId, RequestEnvelope};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde_json::Value;

/// One pipeline stage transition for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    timestamp: DateTime<Utc>,
    method: String,
    endpoint: String,
    snapshot: Value,
    status: AuditStatus,
    correlation_id: CorrelationId,
}

/// Parameter object for reconstructing a persisted audit record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedAuditData {
    /// Time the stage was recorded.
    pub timestamp: DateTime<Utc>,
    /// HTTP method of the request.
    pub method: String,
    /// Endpoint path of the request.
    pub endpoint: String,
    /// Raw payload snapshot.
    pub snapshot: Value,
    /// Recorded stage.
    pub status: AuditStatus,
    /// Correlation id of the request.
    pub correlation_id: CorrelationId,
}

impl AuditRecord {
    /// Records `status` for the request described by `envelope`.
    #[must_use]
    pub fn new(status: AuditStatus, envelope: &RequestEnvelope, clock: &impl Clock) -> Self {
        Self {
            timestamp: clock.utc(),
            method: envelope.method().to_owned(),
            endpoint: envelope.endpoint().to_owned(),
            snapshot: envelope.snapshot().clone(),
            status,
            correlation_id: envelope.correlation_id(),
        }
    }

    /// Reconstructs a record from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedAuditData) -> Self {
        Self {
            timestamp: data.timestamp,
            method: data.method,
            endpoint: data.endpoint,
            snapshot: data.snapshot,
            status: data.status,
            correlation_id: data.correlation_id,
        }
    }

    /// Returns the record timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the endpoint path.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the payload snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &Value {
        &self.snapshot
    }

    /// Returns the recorded stage.
    #[must_use]
    pub const fn status(&self) -> &AuditStatus {
        &self.status
    }

    /// Returns the correlation id.
    #[must_use]
    pub const fn correlation_id(&self) -> CorrelationId {
        self.correlation_id
    }
}
