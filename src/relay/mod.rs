//! Request relay subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request (http/handlers.rs)
//!     → envelope.rs (decode optional HelloRequest, apply default message)
//!     → forwarder.rs (one outbound GET to the downstream service, 30s bound)
//!     → envelope.rs (wrap result in RelayEnvelope / ErrorEnvelope)
//!     → Send to client
//! ```
//!
//! # Design Decisions
//! - Exactly one downstream attempt per inbound request; failures are terminal
//!   for that request and never crash the process
//! - A downstream body that is not valid JSON degrades to a raw string payload,
//!   never to an error
//! - All envelope timestamps are RFC 3339, stamped at construction time

pub mod envelope;
pub mod forwarder;

pub use envelope::{DownstreamPayload, ErrorEnvelope, HelloRequest, RelayEnvelope};
pub use forwarder::{Forwarder, RelayError};
