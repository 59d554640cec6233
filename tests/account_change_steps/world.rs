//! Shared world state for account change BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use serde_json::Value;
use tollgate::account::{adapters::memory::InMemoryAccountRepository, services::AccountService};
use tollgate::audit::{adapters::memory::InMemoryAuditStore, services::AuditSink};
use tollgate::gateway::{
    adapters::LocalBackend,
    domain::{GatewayResponse, InboundRequest},
    services::GatewayPipeline,
};
use tollgate::order::{adapters::memory::InMemoryOrderRepository, services::OrderService};

/// Pipeline type used by the BDD world.
pub type TestPipeline = GatewayPipeline<
    LocalBackend<InMemoryAccountRepository, InMemoryOrderRepository, DefaultClock>,
    InMemoryAuditStore,
    DefaultClock,
>;

/// Scenario world for account change behaviour tests.
pub struct AccountWorld {
    /// The gateway pipeline under test.
    pub pipeline: TestPipeline,
    /// Audit trail written by the pipeline.
    pub audit: Arc<InMemoryAuditStore>,
    /// Response to the most recent request.
    pub last_response: Option<GatewayResponse>,
}

impl AccountWorld {
    /// Creates a world over empty in-memory stores.
    #[must_use]
    pub fn new() -> Self {
        let clock = Arc::new(DefaultClock);
        let backend = LocalBackend::new(
            AccountService::new(
                Arc::new(InMemoryAccountRepository::new()),
                Arc::clone(&clock),
            ),
            OrderService::new(Arc::new(InMemoryOrderRepository::new()), Arc::clone(&clock)),
        );
        let audit = Arc::new(InMemoryAuditStore::new());
        let pipeline = GatewayPipeline::new(
            Arc::new(backend),
            AuditSink::new(Arc::clone(&audit), Arc::clone(&clock)),
            clock,
        );
        Self {
            pipeline,
            audit,
            last_response: None,
        }
    }

    /// Sends a request and remembers the response.
    pub fn send(&mut self, method: &str, path: &str, payload: Value) -> &GatewayResponse {
        let response = run_async(
            self.pipeline
                .handle(InboundRequest::new(method, path, payload)),
        );
        self.last_response.insert(response)
    }

    /// Returns the most recent response.
    ///
    /// # Errors
    ///
    /// Returns an error when no request has been sent yet.
    pub fn response(&self) -> Result<&GatewayResponse, eyre::Report> {
        self.last_response
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no request sent in scenario world"))
    }
}

impl Default for AccountWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> AccountWorld {
    AccountWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
