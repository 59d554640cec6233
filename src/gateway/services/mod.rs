//! Gateway orchestration service.

mod pipeline;

pub use pipeline::{GatewayPipeline, VALIDATION_FAILED};
