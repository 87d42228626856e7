//! Structured logging initialization.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at startup
//! - Honor `RUST_LOG` when set, otherwise the configured level
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - tower-http's HTTP traces are kept at debug alongside this crate

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// `log_level` applies to this crate when `RUST_LOG` is unset.
pub fn init_tracing(log_level: &str) {
    let default_directives = format!("api_relay={},tower_http=debug", log_level);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directives.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
