//! api-relay library.
//!
//! An HTTP relay: requests on two fixed routes are forwarded as a single
//! bounded GET to a configured downstream service, and the downstream result
//! (or failure) is returned to the caller in a uniform JSON envelope.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;

pub use config::RelayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
