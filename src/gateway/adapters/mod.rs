//! Backend, transport and HTTP adapters for the gateway.

pub mod http;
pub mod local;
pub mod relay;
pub mod routed;
pub mod ureq_transport;

pub use local::LocalBackend;
pub use relay::RelayBackend;
pub use routed::RoutedBackend;
pub use ureq_transport::UreqTransport;
