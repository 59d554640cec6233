//! Request pipeline: validate, correlate, audit, dispatch, normalise.

use crate::audit::{domain::AuditStatus, ports::AuditStore, services::AuditSink};
use crate::gateway::{
    domain::{
        BackingFault, BackingReply, CorrelationId, Disposition, GatewayCommand, GatewayResponse,
        InboundRequest, Operation, PipelineState, RequestEnvelope, ResponseEnvelope,
    },
    ports::Backend,
};
use crate::validation::ValidationOutcome;
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;
use tracing::Instrument;

/// Message of the envelope returned for a payload that failed validation.
pub const VALIDATION_FAILED: &str = "Validation failed.";

/// Top-level gateway pipeline.
///
/// Each call to [`GatewayPipeline::handle`] is an independent, sequential
/// run: the request gets a fresh correlation id, is validated against its
/// operation schema, audited, dispatched to the backend and normalised
/// into a [`ResponseEnvelope`]. No state is shared between runs beyond the
/// backend and audit store themselves.
///
/// A run executes on its own task. Dropping the future returned by
/// [`GatewayPipeline::handle`], as happens when a client disconnects, does
/// not stop the run, so a started operation still gets its terminal audit
/// record.
pub struct GatewayPipeline<B, S, C>
where
    B: Backend + 'static,
    S: AuditStore,
    C: Clock + Send + Sync,
{
    backend: Arc<B>,
    audit: AuditSink<S, C>,
    clock: Arc<C>,
}

struct Run {
    envelope: RequestEnvelope,
    state: PipelineState,
}

impl Run {
    fn advance(&mut self, next: PipelineState) {
        match self.state.transition_to(next) {
            Ok(state) => {
                tracing::debug!(from = %self.state, to = %state, "pipeline state changed");
                self.state = state;
            }
            Err(err) => tracing::error!(error = %err, "pipeline state machine violated"),
        }
    }
}

impl<B, S, C> Clone for GatewayPipeline<B, S, C>
where
    B: Backend + 'static,
    S: AuditStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            audit: self.audit.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<B, S, C> GatewayPipeline<B, S, C>
where
    B: Backend + 'static,
    S: AuditStore + 'static,
    C: Clock + Send + Sync + 'static,
{
    /// Creates a pipeline over a backend and an audit sink.
    #[must_use]
    pub const fn new(backend: Arc<B>, audit: AuditSink<S, C>, clock: Arc<C>) -> Self {
        Self {
            backend,
            audit,
            clock,
        }
    }

    /// Handles one inbound request end to end.
    ///
    /// Never fails: validation problems, business failures and backing
    /// faults all end in a [`GatewayResponse`] whose disposition says which.
    pub async fn handle(&self, request: InboundRequest) -> GatewayResponse {
        let correlation_id = CorrelationId::generate();
        let span = tracing::info_span!(
            "gateway_request",
            correlation_id = %correlation_id,
            method = %request.method,
            endpoint = %request.path,
        );
        let run = self.clone();
        let task = tokio::spawn(
            async move { run.process(request, correlation_id).await }.instrument(span),
        );
        task.await.unwrap_or_else(|err| {
            tracing::error!(%correlation_id, error = %err, "pipeline task did not complete");
            GatewayResponse {
                disposition: Disposition::Faulted,
                envelope: ResponseEnvelope::new(
                    self.clock.utc(),
                    false,
                    BackingFault::Aborted.to_string(),
                    None,
                ),
                correlation_id: Some(correlation_id),
            }
        })
    }

    async fn process(
        &self,
        request: InboundRequest,
        correlation_id: CorrelationId,
    ) -> GatewayResponse {
        let mut run = Run {
            envelope: RequestEnvelope::new(request, correlation_id),
            state: PipelineState::Received,
        };

        let Some(operation) =
            Operation::from_route(run.envelope.method(), run.envelope.endpoint())
        else {
            let message = format!(
                "Unknown endpoint: {} {}",
                run.envelope.method(),
                run.envelope.endpoint()
            );
            return self
                .reject(&mut run, Disposition::Unrouted, message.clone(), vec![message])
                .await;
        };

        let command = match GatewayCommand::parse(operation, run.envelope.snapshot()) {
            ValidationOutcome::Valid(command) => command,
            ValidationOutcome::Invalid(violations) => {
                return self
                    .reject(
                        &mut run,
                        Disposition::Rejected,
                        VALIDATION_FAILED.to_owned(),
                        violations,
                    )
                    .await;
            }
        };
        run.advance(PipelineState::Validated);

        self.audit
            .record(AuditStatus::OperationStarted, &run.envelope)
            .await;
        run.advance(PipelineState::Dispatched);
        tracing::info!(%operation, "dispatching backing call");

        match self.dispatch(command, &run.envelope).await {
            Ok(reply) => {
                run.advance(PipelineState::BackingSuccess);
                self.audit
                    .record(AuditStatus::OperationCompleted, &run.envelope)
                    .await;
                run.advance(PipelineState::Responded);
                let disposition = if reply.success {
                    Disposition::Completed
                } else {
                    Disposition::Declined
                };
                tracing::info!(%disposition, message = %reply.message, "backing call finished");
                self.respond(&run, disposition, reply)
            }
            Err(fault) => {
                run.advance(PipelineState::BackingFailure);
                tracing::error!(error = %fault, "backing call failed");
                self.audit
                    .record(AuditStatus::OperationFailed(fault.to_string()), &run.envelope)
                    .await;
                run.advance(PipelineState::Responded);
                self.respond(
                    &run,
                    Disposition::Faulted,
                    BackingReply::declined(fault.to_string()),
                )
            }
        }
    }

    async fn reject(
        &self,
        run: &mut Run,
        disposition: Disposition,
        message: String,
        violations: Vec<String>,
    ) -> GatewayResponse {
        run.advance(PipelineState::Rejected);
        tracing::info!(violations = ?violations, "request rejected");
        self.audit
            .record(AuditStatus::ValidationFailed(violations.clone()), &run.envelope)
            .await;
        let data = Value::from(violations);
        self.respond(
            run,
            disposition,
            BackingReply {
                success: false,
                message,
                data: Some(data),
            },
        )
    }

    async fn dispatch(
        &self,
        command: GatewayCommand,
        envelope: &RequestEnvelope,
    ) -> Result<BackingReply, BackingFault> {
        let backend = Arc::clone(&self.backend);
        let task_envelope = envelope.clone();
        let task = tokio::spawn(
            async move { backend.dispatch(command, &task_envelope).await }.in_current_span(),
        );
        task.await.unwrap_or_else(|err| {
            tracing::error!(error = %err, "backing task did not complete");
            Err(BackingFault::Aborted)
        })
    }

    fn respond(&self, run: &Run, disposition: Disposition, reply: BackingReply) -> GatewayResponse {
        GatewayResponse {
            disposition,
            envelope: ResponseEnvelope::new(
                self.clock.utc(),
                reply.success,
                reply.message,
                reply.data,
            ),
            correlation_id: Some(run.envelope.correlation_id()),
        }
    }
}
