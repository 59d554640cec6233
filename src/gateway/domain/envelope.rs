//! Request and response envelopes.

use super::{CorrelationId, Disposition};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw request as received by the gateway boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundRequest {
    /// HTTP method.
    pub method: String,
    /// Request path without query string.
    pub path: String,
    /// JSON body, or query parameters collected into an object.
    pub payload: Value,
}

impl InboundRequest {
    /// Creates an inbound request.
    #[must_use]
    pub fn new(method: impl Into<String>, path: impl Into<String>, payload: Value) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            payload,
        }
    }
}

/// Inbound payload plus request metadata, fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEnvelope {
    method: String,
    endpoint: String,
    snapshot: Value,
    correlation_id: CorrelationId,
}

impl RequestEnvelope {
    /// Wraps an inbound request with its correlation id.
    #[must_use]
    pub fn new(request: InboundRequest, correlation_id: CorrelationId) -> Self {
        let InboundRequest {
            method,
            path,
            payload,
        } = request;
        Self {
            method: method.to_ascii_uppercase(),
            endpoint: path,
            snapshot: payload,
            correlation_id,
        }
    }

    /// Returns the upper-cased HTTP method.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the endpoint path.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the raw payload as received.
    #[must_use]
    pub const fn snapshot(&self) -> &Value {
        &self.snapshot
    }

    /// Returns the correlation id.
    #[must_use]
    pub const fn correlation_id(&self) -> CorrelationId {
        self.correlation_id
    }
}

/// Uniform outward response shape.
///
/// ```json
/// {"date": "2026-01-01T00:00:00Z", "status": false, "message": "Old email not found."}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Time the response was produced.
    pub date: DateTime<Utc>,
    /// Business success flag.
    pub status: bool,
    /// Human-readable outcome.
    pub message: String,
    /// Operation-specific payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ResponseEnvelope {
    /// Creates an envelope.
    #[must_use]
    pub fn new(
        date: DateTime<Utc>,
        status: bool,
        message: impl Into<String>,
        data: Option<Value>,
    ) -> Self {
        Self {
            date,
            status,
            message: message.into(),
            data,
        }
    }
}

/// Envelope plus the pipeline's classification of the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResponse {
    /// How the request ended.
    pub disposition: Disposition,
    /// Body returned to the caller.
    pub envelope: ResponseEnvelope,
    /// Correlation id, absent only for requests that never got one.
    pub correlation_id: Option<CorrelationId>,
}
