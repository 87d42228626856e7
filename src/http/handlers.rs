//! The two relay handlers.
//!
//! # Responsibilities
//! - Decode the optional inbound body for `/api/hello`
//! - Drive the per-request lifecycle: Received → Forwarding →
//!   (Succeeded | Failed) → Responded
//! - Translate the forwarder result into the success or error envelope
//!
//! # Design Decisions
//! - The whole request is taken so GET and POST share one handler; a GET
//!   simply has no decodable body and gets the default message
//! - A body that fails to decode is treated like an absent body, never a 400
//! - Exactly one downstream attempt; failure maps to HTTP 500

use axum::body::{to_bytes, Body};
use axum::extract::State;
use axum::http::{Method, Request};
use axum::response::{IntoResponse, Response};

use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::relay::envelope::{ErrorEnvelope, HelloRequest, RelayEnvelope};

/// Inbound bodies above this size are ignored rather than buffered.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// `GET /`: static greeting, relayed downstream.
pub async fn root(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request_id(request.headers()).to_string();

    tracing::info!(
        request_id = %request_id,
        method = %request.method(),
        path = "/",
        "Received request"
    );

    let message = format!(
        "Hello from API1 ({})!",
        state.config.downstream.processed_by
    );
    relay(&state, &request_id, "/", message).await
}

/// `GET|POST /api/hello`: echoes the caller's message, relayed downstream.
pub async fn hello(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request_id(request.headers()).to_string();

    tracing::info!(
        request_id = %request_id,
        method = %request.method(),
        path = "/api/hello",
        "Received request"
    );

    let (parts, body) = request.into_parts();
    let hello = if parts.method == Method::POST {
        match to_bytes(body, MAX_BODY_BYTES).await {
            Ok(bytes) => serde_json::from_slice::<HelloRequest>(&bytes).unwrap_or_default(),
            Err(_) => HelloRequest::default(),
        }
    } else {
        HelloRequest::default()
    };

    let message = format!("API1 processed: {}", hello.message_or_default());
    relay(&state, &request_id, "/api/hello", message).await
}

/// One inbound request, one downstream attempt, one envelope.
async fn relay(state: &AppState, request_id: &str, path: &str, message: String) -> Response {
    match state.forwarder.fetch(path).await {
        Ok(payload) => {
            tracing::info!(
                request_id = %request_id,
                path = %path,
                "Successfully processed request and got response from API2"
            );
            RelayEnvelope::success(message, state.config.downstream.processed_by.clone(), payload)
                .into_response()
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                path = %path,
                error = %e,
                "Error communicating with API2"
            );
            ErrorEnvelope::new(format!("Failed to communicate with API2: {}", e)).into_response()
        }
    }
}
