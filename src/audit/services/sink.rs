//! Audit sink used by the gateway pipeline.

use crate::audit::{
    domain::{AuditRecord, AuditStatus},
    ports::AuditStore,
};
use crate::gateway::domain::RequestEnvelope;
use mockable::Clock;
use std::sync::Arc;
use std::time::Duration;

/// Upper bound on a single append unless configured otherwise.
pub const DEFAULT_AUDIT_TIMEOUT: Duration = Duration::from_secs(2);

/// Records pipeline stages without ever failing the caller.
///
/// Each append is bounded by a timeout; a store that is slow or unreachable
/// costs the request at most that long per record.
pub struct AuditSink<S, C>
where
    S: AuditStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    timeout: Duration,
}

impl<S, C> Clone for AuditSink<S, C>
where
    S: AuditStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            timeout: self.timeout,
        }
    }
}

impl<S, C> AuditSink<S, C>
where
    S: AuditStore,
    C: Clock + Send + Sync,
{
    /// Creates a sink over an audit store with [`DEFAULT_AUDIT_TIMEOUT`].
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            timeout: DEFAULT_AUDIT_TIMEOUT,
        }
    }

    /// Sets the upper bound on a single append.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Appends a record for `envelope` at `status`.
    ///
    /// Store failures and appends that outlive the timeout are logged at
    /// `warn` and otherwise ignored.
    pub async fn record(&self, status: AuditStatus, envelope: &RequestEnvelope) {
        let record = AuditRecord::new(status, envelope, &*self.clock);
        match tokio::time::timeout(self.timeout, self.store.append(&record)).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => tracing::warn!(
                correlation_id = %record.correlation_id(),
                status = %record.status(),
                error = %err,
                "audit record dropped"
            ),
            Err(_) => tracing::warn!(
                correlation_id = %record.correlation_id(),
                status = %record.status(),
                timeout_ms = self.timeout.as_millis(),
                "audit record dropped after timeout"
            ),
        }
    }
}
