//! Blocking `ureq` transport run on the blocking thread pool.

use crate::gateway::ports::{
    DownstreamRequest, DownstreamResponse, DownstreamTransport, TransportError,
};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Header carrying the correlation id to downstream services.
pub const CORRELATION_HEADER: &str = "x-correlation-id";
/// Header carrying the method the gateway received.
pub const ORIGIN_METHOD_HEADER: &str = "x-origin-method";
/// Header carrying the path the gateway received.
pub const ORIGIN_PATH_HEADER: &str = "x-origin-path";

/// Downstream transport backed by a shared `ureq` agent.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Creates a transport with the same connect, read and write timeout.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .build();
        Self { agent }
    }
}

fn read_response(response: ureq::Response) -> DownstreamResponse {
    let status = response.status();
    let body = response.into_json::<Value>().ok();
    DownstreamResponse { status, body }
}

fn send_blocking(
    agent: &ureq::Agent,
    request: DownstreamRequest,
) -> Result<DownstreamResponse, TransportError> {
    let DownstreamRequest {
        url,
        method,
        body,
        correlation_id,
        origin_path,
    } = request;

    let result = agent
        .request(&method, &url)
        .set(CORRELATION_HEADER, &correlation_id.to_string())
        .set(ORIGIN_METHOD_HEADER, &method)
        .set(ORIGIN_PATH_HEADER, &origin_path)
        .set("Accept", "application/json")
        .send_json(body);

    match result {
        Ok(response) | Err(ureq::Error::Status(_, response)) => Ok(read_response(response)),
        Err(ureq::Error::Transport(transport)) => Err(TransportError::Unreachable {
            url,
            reason: transport.to_string(),
        }),
    }
}

#[async_trait]
impl DownstreamTransport for UreqTransport {
    async fn send(&self, request: DownstreamRequest) -> Result<DownstreamResponse, TransportError> {
        let agent = self.agent.clone();
        let url = request.url.clone();
        tokio::task::spawn_blocking(move || send_blocking(&agent, request))
            .await
            .map_err(|_| TransportError::Cancelled(url))?
    }
}
