//! Backing call port.

use crate::gateway::domain::{BackingFault, BackingReply, GatewayCommand, RequestEnvelope};
use async_trait::async_trait;

/// Executes validated commands against a backing service.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Runs `command` for the request described by `envelope`.
    ///
    /// Conflicts and missing records are returned as a declined
    /// [`BackingReply`], not as faults.
    ///
    /// # Errors
    ///
    /// Returns [`BackingFault`] when the store or downstream service fails.
    async fn dispatch(
        &self,
        command: GatewayCommand,
        envelope: &RequestEnvelope,
    ) -> Result<BackingReply, BackingFault>;
}
