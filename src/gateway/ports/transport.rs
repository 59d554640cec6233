//! Downstream HTTP transport port.

use crate::gateway::domain::CorrelationId;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// A relayed call to a downstream service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownstreamRequest {
    /// Absolute target URL.
    pub url: String,
    /// HTTP method, forwarded unchanged.
    pub method: String,
    /// Logical payload, forwarded unchanged.
    pub body: Value,
    /// Correlation id of the originating request.
    pub correlation_id: CorrelationId,
    /// Endpoint path the gateway received.
    pub origin_path: String,
}

/// Raw downstream answer before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownstreamResponse {
    /// HTTP status code.
    pub status: u16,
    /// Parsed JSON body, `None` when absent or not JSON.
    pub body: Option<Value>,
}

/// Failure to obtain any response from a downstream service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("transport failure calling {url}: {reason}")]
    Unreachable {
        /// Target URL.
        url: String,
        /// Underlying cause.
        reason: String,
    },

    /// The blocking call was cancelled before completing.
    #[error("downstream call to {0} was cancelled")]
    Cancelled(String),
}

/// Sends requests to downstream services.
#[async_trait]
pub trait DownstreamTransport: Send + Sync {
    /// Sends `request` and returns whatever the service answered.
    ///
    /// Non-success status codes are responses, not errors.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no response was received.
    async fn send(&self, request: DownstreamRequest) -> Result<DownstreamResponse, TransportError>;
}
