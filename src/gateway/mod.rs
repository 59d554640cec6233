//! Gateway validation and orchestration pipeline.
//!
//! [`services::GatewayPipeline`] drives every inbound request through the
//! same sequence:
//!
//! 1. Assign a [`domain::CorrelationId`].
//! 2. Resolve the method and path to a [`domain::Operation`] and validate
//!    the payload against its schema. Failures are audited and answered
//!    without any backing call.
//! 3. Audit `operation started`, dispatch to a [`ports::Backend`], then
//!    audit exactly one of `operation completed` or `operation failed`.
//! 4. Normalise the result into a [`domain::ResponseEnvelope`].
//!
//! Backends are either local (the account and order services) or relays to
//! downstream HTTP services, chosen per operation by configuration.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
