//! Backend relaying commands to a downstream HTTP service.

use crate::gateway::{
    domain::{BackingFault, BackingReply, GatewayCommand, RequestEnvelope},
    ports::{Backend, DownstreamRequest, DownstreamTransport},
};
use async_trait::async_trait;
use std::sync::Arc;

/// Forwards the original payload to `base_url` + endpoint path.
///
/// A 5xx answer is a [`BackingFault::Downstream`] regardless of its body.
/// Any other answer must itself be envelope-shaped; a body without a
/// boolean `status` is a [`BackingFault::MalformedDownstreamResponse`].
pub struct RelayBackend<T>
where
    T: DownstreamTransport,
{
    transport: Arc<T>,
    base_url: String,
}

impl<T> RelayBackend<T>
where
    T: DownstreamTransport,
{
    /// Creates a relay to `base_url`.
    #[must_use]
    pub fn new(transport: Arc<T>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl<T> Backend for RelayBackend<T>
where
    T: DownstreamTransport,
{
    async fn dispatch(
        &self,
        command: GatewayCommand,
        envelope: &RequestEnvelope,
    ) -> Result<BackingReply, BackingFault> {
        let request = DownstreamRequest {
            url: self.url_for(envelope.endpoint()),
            method: envelope.method().to_owned(),
            body: envelope.snapshot().clone(),
            correlation_id: envelope.correlation_id(),
            origin_path: envelope.endpoint().to_owned(),
        };
        tracing::debug!(
            url = %request.url,
            operation = %command.operation(),
            "relaying to downstream service"
        );

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|err| BackingFault::Downstream(err.to_string()))?;
        if response.status >= 500 {
            return Err(BackingFault::Downstream(format!(
                "downstream service answered HTTP {}",
                response.status
            )));
        }
        let body = response
            .body
            .ok_or(BackingFault::MalformedDownstreamResponse)?;
        BackingReply::from_downstream(&body)
    }
}
