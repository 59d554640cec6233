//! Backend choosing local or downstream execution per operation.

use crate::config::{GatewayConfig, RouteConfig};
use crate::gateway::{
    adapters::RelayBackend,
    domain::{BackingFault, BackingReply, GatewayCommand, Operation, RequestEnvelope},
    ports::{Backend, DownstreamTransport},
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Dispatches each command to the backend its operation is routed to.
pub struct RoutedBackend {
    local: Arc<dyn Backend>,
    downstream: BTreeMap<Operation, Arc<dyn Backend>>,
}

impl RoutedBackend {
    /// Creates a router sending every operation to `local`.
    #[must_use]
    pub fn new(local: Arc<dyn Backend>) -> Self {
        Self {
            local,
            downstream: BTreeMap::new(),
        }
    }

    /// Routes `operation` to `backend` instead of the local one.
    #[must_use]
    pub fn with_route(mut self, operation: Operation, backend: Arc<dyn Backend>) -> Self {
        self.downstream.insert(operation, backend);
        self
    }

    /// Builds the routing table from configuration.
    ///
    /// Every `downstream` route gets a [`RelayBackend`] over `transport`;
    /// all other operations run locally.
    #[must_use]
    pub fn from_config<T>(config: &GatewayConfig, local: Arc<dyn Backend>, transport: &Arc<T>) -> Self
    where
        T: DownstreamTransport + 'static,
    {
        Operation::ALL
            .into_iter()
            .fold(Self::new(local), |routed, operation| {
                match config.route(operation) {
                    RouteConfig::Local => routed,
                    RouteConfig::Downstream { base_url } => {
                        let relay = RelayBackend::new(Arc::clone(transport), base_url);
                        routed.with_route(operation, Arc::new(relay))
                    }
                }
            })
    }

    fn backend_for(&self, operation: Operation) -> &Arc<dyn Backend> {
        self.downstream.get(&operation).unwrap_or(&self.local)
    }
}

#[async_trait]
impl Backend for RoutedBackend {
    async fn dispatch(
        &self,
        command: GatewayCommand,
        envelope: &RequestEnvelope,
    ) -> Result<BackingReply, BackingFault> {
        self.backend_for(command.operation())
            .dispatch(command, envelope)
            .await
    }
}
