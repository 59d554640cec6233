//! Error types for the gateway domain.

use super::PipelineState;
use std::sync::Arc;
use thiserror::Error;

/// Fault raised while executing a backing call.
///
/// Business failures (conflicts, missing records) are not faults; they
/// travel as a declined [`super::BackingReply`].
#[derive(Debug, Clone, Error)]
pub enum BackingFault {
    /// The gateway-owned store failed.
    #[error("store failure: {0}")]
    Store(Arc<dyn std::error::Error + Send + Sync>),

    /// A validated request could not be mapped onto domain values.
    #[error("rejected by domain rules: {0}")]
    Domain(Arc<dyn std::error::Error + Send + Sync>),

    /// The downstream service was unreachable, timed out or answered 5xx.
    #[error("downstream call failed: {0}")]
    Downstream(String),

    /// The downstream response lacked a boolean success indicator.
    #[error("malformed downstream response")]
    MalformedDownstreamResponse,

    /// The backing task panicked or was cancelled.
    #[error("operation aborted")]
    Aborted,
}

impl BackingFault {
    /// Wraps a store error.
    pub fn store(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Store(Arc::new(err))
    }

    /// Wraps a domain error.
    pub fn domain(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Domain(Arc::new(err))
    }
}

/// Error returned for an illegal pipeline state transition.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid pipeline transition from {from} to {to}")]
pub struct PipelineStateError {
    /// State the pipeline was in.
    pub from: PipelineState,
    /// Requested next state.
    pub to: PipelineState,
}

/// Error returned while parsing operation names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown operation: {0}")]
pub struct ParseOperationError(pub String);
