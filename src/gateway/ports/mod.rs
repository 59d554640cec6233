//! Port contracts for backing calls.

pub mod backend;
pub mod transport;

pub use backend::Backend;
pub use transport::{DownstreamRequest, DownstreamResponse, DownstreamTransport, TransportError};
