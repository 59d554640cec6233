//! Domain model for the gateway pipeline.

mod command;
mod envelope;
mod error;
mod ids;
mod operation;
mod reply;
mod state;

pub use command::GatewayCommand;
pub use envelope::{GatewayResponse, InboundRequest, RequestEnvelope, ResponseEnvelope};
pub use error::{BackingFault, ParseOperationError, PipelineStateError};
pub use ids::CorrelationId;
pub use operation::Operation;
pub use reply::{BackingReply, Disposition};
pub use state::PipelineState;
