//! Shared helpers for gateway flow tests.

use mockable::DefaultClock;
use rstest::fixture;
use serde_json::{Value, json};
use std::sync::Arc;
use tollgate::account::{adapters::memory::InMemoryAccountRepository, services::AccountService};
use tollgate::audit::{
    adapters::memory::InMemoryAuditStore, domain::AuditRecord, ports::AuditStore,
    services::AuditSink,
};
use tollgate::gateway::{
    adapters::LocalBackend,
    domain::{GatewayResponse, InboundRequest},
    ports::Backend,
    services::GatewayPipeline,
};
use tollgate::order::{adapters::memory::InMemoryOrderRepository, services::OrderService};

/// Backend executing every operation against in-memory stores.
pub type MemoryBackend =
    LocalBackend<InMemoryAccountRepository, InMemoryOrderRepository, DefaultClock>;

/// Pipeline over an arbitrary backend and an in-memory audit store.
pub type TestPipeline<B> = GatewayPipeline<B, InMemoryAuditStore, DefaultClock>;

/// A pipeline together with the audit store it writes to.
pub struct Gateway<B: Backend + 'static> {
    /// Pipeline under test.
    pub pipeline: Arc<TestPipeline<B>>,
    /// Audit trail written by the pipeline.
    pub audit: Arc<InMemoryAuditStore>,
}

impl<B: Backend + 'static> Gateway<B> {
    /// Wraps `backend` in a fresh pipeline.
    pub fn over(backend: B) -> Self {
        let audit = Arc::new(InMemoryAuditStore::new());
        let clock = Arc::new(DefaultClock);
        let pipeline = GatewayPipeline::new(
            Arc::new(backend),
            AuditSink::new(Arc::clone(&audit), Arc::clone(&clock)),
            clock,
        );
        Self {
            pipeline: Arc::new(pipeline),
            audit,
        }
    }

    /// Sends one request through the pipeline.
    pub async fn send(&self, method: &str, path: &str, payload: Value) -> GatewayResponse {
        self.pipeline
            .handle(InboundRequest::new(method, path, payload))
            .await
    }

    /// Returns the audit records written for a response.
    pub async fn trail(&self, response: &GatewayResponse) -> Vec<AuditRecord> {
        let correlation_id = response.correlation_id.expect("correlation id assigned");
        self.audit
            .find_by_correlation_id(correlation_id)
            .await
            .expect("audit store available")
    }
}

/// Builds a backend over empty in-memory stores.
pub fn memory_backend() -> MemoryBackend {
    let clock = Arc::new(DefaultClock);
    LocalBackend::new(
        AccountService::new(
            Arc::new(InMemoryAccountRepository::new()),
            Arc::clone(&clock),
        ),
        OrderService::new(Arc::new(InMemoryOrderRepository::new()), clock),
    )
}

/// Provides a gateway over empty in-memory stores.
#[fixture]
pub fn gateway() -> Gateway<MemoryBackend> {
    Gateway::over(memory_backend())
}

/// Payload for `POST /accounts`.
pub fn account(id: i64, name: &str, email: &str) -> Value {
    json!({"id": id, "name": name, "email": email, "password": "correct horse"})
}

/// Payload for `POST /orders`.
pub fn order(order_id: i64, quantity: i64) -> Value {
    json!({
        "order_id": order_id,
        "account_id": 7,
        "product_id": 3,
        "quantity": quantity,
        "recipient": "Ada Lovelace",
        "address": "12 St James's Square, London",
        "phone": "+442071234567",
    })
}
