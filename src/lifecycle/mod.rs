//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Init tracing → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C → broadcast signal → stop accepting → drain in-flight → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: a bind or validation error at startup is fatal (non-zero exit)
//! - Shutdown drains in-flight relays; there is no forced deadline because a
//!   single request is already bounded by the inbound timeout layer

pub mod shutdown;

pub use shutdown::{ctrl_c, Shutdown};
