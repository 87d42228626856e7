//! api-relay (API1)
//!
//! An HTTP relay built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                  API RELAY                   │
//!                      │                                              │
//!   Client Request     │  ┌─────────┐   ┌──────────┐   ┌───────────┐ │
//!   ───────────────────┼─▶│  http   │──▶│ handlers │──▶│ forwarder │─┼──▶ Downstream
//!                      │  │ server  │   │          │   │  (1 GET)  │ │    ("API2")
//!                      │  └─────────┘   └──────────┘   └─────┬─────┘ │
//!                      │                                     │       │
//!   Client Response    │  ┌──────────┐                       │       │
//!   ◀──────────────────┼──│ envelope │◀──────────────────────┘       │
//!                      │  └──────────┘                               │
//!                      │                                              │
//!                      │  ┌────────────────────────────────────────┐ │
//!                      │  │         Cross-Cutting Concerns          │ │
//!                      │  │  config · observability · lifecycle     │ │
//!                      │  └────────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;

use api_relay::config::resolve_config;
use api_relay::http::HttpServer;
use api_relay::lifecycle::{ctrl_c, Shutdown};
use api_relay::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config first so the log level is honored from the start. A validation
    // failure here is fatal before any listener exists.
    let config = resolve_config()?;

    init_tracing(&config.observability.log_level);

    tracing::info!("api-relay v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        downstream = %config.downstream.base_url,
        downstream_timeout_secs = config.timeouts.downstream_secs,
        "Configuration loaded"
    );

    // Bind TCP listener; failure to bind is fatal.
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Ready to receive requests and forward to API2"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        ctrl_c().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
