pub mod error;
pub mod net;
pub mod remote;

// Re-exports for convenience
pub use error::{GatewayError, GatewayErrorKind};
pub use net::default_http_client;
pub use remote::{CartGateway, HttpCartGateway};
