//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; log lines are observability aids only,
//!   never part of the relay's functional contract
//! - The request ID flows from the middleware through every handler log line
//! - No metrics endpoint; the relay's surface is the two routes it serves

pub mod logging;

pub use logging::init_tracing;
