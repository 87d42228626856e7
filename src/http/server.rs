//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the relay handlers
//! - Wire up middleware (request ID, tracing, inbound timeout)
//! - Build the shared handler state (config + forwarder)
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tower_http::ServiceBuilderExt;

use crate::config::RelayConfig;
use crate::http::handlers;
use crate::http::request::MakeRequestUuid;
use crate::relay::Forwarder;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub forwarder: Forwarder,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let forwarder = Forwarder::new(
            reqwest::Client::new(),
            config.downstream.base_url.clone(),
            Duration::from_secs(config.timeouts.downstream_secs),
        );

        let state = AppState {
            config: Arc::new(config.clone()),
            forwarder,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        // Outermost to innermost: stamp the request ID before tracing so the
        // span sees it, propagate it onto the response, then bound the
        // inbound request lifetime.
        let middleware = ServiceBuilder::new()
            .set_x_request_id(MakeRequestUuid)
            .layer(TraceLayer::new_for_http())
            .propagate_x_request_id()
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )));

        Router::new()
            .route("/", get(handlers::root))
            .route("/api/hello", get(handlers::hello).post(handlers::hello))
            .with_state(state)
            .layer(middleware)
    }

    /// Run the server, accepting connections on the given listener until the
    /// shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            downstream = %self.config.downstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}
