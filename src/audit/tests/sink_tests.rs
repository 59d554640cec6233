//! Unit tests for the best-effort audit sink.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::audit::{
    adapters::memory::InMemoryAuditStore,
    domain::{AuditRecord, AuditStatus},
    ports::{AuditStore, AuditStoreError, AuditStoreResult},
    services::AuditSink,
};
use crate::gateway::domain::{CorrelationId, InboundRequest, RequestEnvelope};
use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use serde_json::json;

mockall::mock! {
    Store {}

    #[async_trait]
    impl AuditStore for Store {
        async fn append(&self, record: &AuditRecord) -> AuditStoreResult<()>;
        async fn find_by_correlation_id(
            &self,
            correlation_id: CorrelationId,
        ) -> AuditStoreResult<Vec<AuditRecord>>;
    }
}

#[fixture]
fn envelope() -> RequestEnvelope {
    let request = InboundRequest::new("put", "/accounts/email", json!({"old_email": "a@x.com"}));
    RequestEnvelope::new(request, CorrelationId::generate())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn record_copies_request_metadata(envelope: RequestEnvelope) {
    let store = Arc::new(InMemoryAuditStore::new());
    let sink = AuditSink::new(Arc::clone(&store), Arc::new(DefaultClock));

    sink.record(AuditStatus::OperationStarted, &envelope).await;

    let records = store
        .find_by_correlation_id(envelope.correlation_id())
        .await
        .expect("store available");
    assert_eq!(records.len(), 1);
    let record = records.first().expect("one record");
    assert_eq!(record.method(), "PUT");
    assert_eq!(record.endpoint(), "/accounts/email");
    assert_eq!(record.snapshot(), &json!({"old_email": "a@x.com"}));
    assert_eq!(record.status(), &AuditStatus::OperationStarted);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_failure_is_swallowed(envelope: RequestEnvelope) {
    let mut store = MockStore::new();
    store.expect_append().times(1).returning(|_| {
        Err(AuditStoreError::persistence(std::io::Error::other(
            "audit database unreachable",
        )))
    });
    let sink = AuditSink::new(Arc::new(store), Arc::new(DefaultClock));

    sink.record(AuditStatus::OperationCompleted, &envelope).await;
}

struct StalledStore;

#[async_trait]
impl AuditStore for StalledStore {
    async fn append(&self, _record: &AuditRecord) -> AuditStoreResult<()> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(())
    }

    async fn find_by_correlation_id(
        &self,
        _correlation_id: CorrelationId,
    ) -> AuditStoreResult<Vec<AuditRecord>> {
        Ok(Vec::new())
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stalled_store_is_abandoned_after_timeout(envelope: RequestEnvelope) {
    let sink = AuditSink::new(Arc::new(StalledStore), Arc::new(DefaultClock))
        .with_timeout(Duration::from_millis(50));

    let started = Instant::now();
    sink.record(AuditStatus::OperationStarted, &envelope).await;

    assert!(started.elapsed() < Duration::from_secs(1));
}
