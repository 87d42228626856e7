//! JSON envelope types for the relay's inbound and outbound surface.
//!
//! # Responsibilities
//! - Decode the optional inbound request body (`HelloRequest`)
//! - Model the downstream payload as JSON-or-raw-text (`DownstreamPayload`)
//! - Build the uniform success/error envelopes returned to the caller
//!
//! # Design Decisions
//! - `DownstreamPayload` is an untagged union: it serializes as the bare JSON
//!   value or the bare string, exactly as the downstream produced it
//! - `from_api2` is omitted from the success envelope when absent, not null
//! - Error envelopes always map to HTTP 500

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Substituted when the inbound `message` is empty or missing.
pub const DEFAULT_MESSAGE: &str = "Hello World from user!";

/// Optional inbound request body for `/api/hello`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HelloRequest {
    #[serde(default)]
    pub message: String,
}

impl HelloRequest {
    /// The caller's message, or [`DEFAULT_MESSAGE`] when empty.
    pub fn message_or_default(&self) -> &str {
        if self.message.is_empty() {
            DEFAULT_MESSAGE
        } else {
            &self.message
        }
    }
}

/// What the downstream service answered with.
///
/// The downstream is opaque: its body is parsed as arbitrary JSON when
/// possible, otherwise carried verbatim as a string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DownstreamPayload {
    Json(Value),
    Text(String),
}

impl DownstreamPayload {
    /// Parse a downstream body. Invalid JSON is not an error here; the raw
    /// text is preserved verbatim instead.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => DownstreamPayload::Json(value),
            Err(_) => DownstreamPayload::Text(body.to_string()),
        }
    }
}

/// Success envelope returned to the inbound caller with HTTP 200.
#[derive(Debug, Clone, Serialize)]
pub struct RelayEnvelope {
    pub message: String,
    pub status: &'static str,
    pub timestamp: String,
    pub processed_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_api2: Option<DownstreamPayload>,
}

impl RelayEnvelope {
    /// Build a success envelope, stamped with the current time.
    pub fn success(
        message: impl Into<String>,
        processed_by: impl Into<String>,
        from_api2: DownstreamPayload,
    ) -> Self {
        Self {
            message: message.into(),
            status: "success",
            timestamp: Utc::now().to_rfc3339(),
            processed_by: processed_by.into(),
            from_api2: Some(from_api2),
        }
    }
}

impl IntoResponse for RelayEnvelope {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Error envelope returned to the inbound caller with HTTP 500.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub status: &'static str,
    pub timestamp: String,
}

impl ErrorEnvelope {
    /// Build an error envelope, stamped with the current time.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: "error",
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

impl IntoResponse for ErrorEnvelope {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_default_substitution() {
        let empty = HelloRequest::default();
        assert_eq!(empty.message_or_default(), DEFAULT_MESSAGE);

        let blank = HelloRequest {
            message: String::new(),
        };
        assert_eq!(blank.message_or_default(), DEFAULT_MESSAGE);

        let custom = HelloRequest {
            message: "hi".to_string(),
        };
        assert_eq!(custom.message_or_default(), "hi");
    }

    #[test]
    fn test_hello_request_tolerates_missing_field() {
        let req: HelloRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.message_or_default(), DEFAULT_MESSAGE);
    }

    #[test]
    fn test_payload_parses_json_body() {
        let payload = DownstreamPayload::from_body(r#"{"message":"Hello from API2"}"#);
        assert_eq!(
            payload,
            DownstreamPayload::Json(json!({"message": "Hello from API2"}))
        );
    }

    #[test]
    fn test_payload_falls_back_to_raw_text() {
        let payload = DownstreamPayload::from_body("plain text");
        assert_eq!(payload, DownstreamPayload::Text("plain text".to_string()));

        // Untagged: serializes as the bare string, not a wrapper object.
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, json!("plain text"));
    }

    #[test]
    fn test_payload_accepts_scalar_json() {
        // Any JSON value counts, not just objects.
        assert_eq!(
            DownstreamPayload::from_body("42"),
            DownstreamPayload::Json(json!(42))
        );
        assert_eq!(
            DownstreamPayload::from_body(r#""quoted""#),
            DownstreamPayload::Json(json!("quoted"))
        );
    }

    #[test]
    fn test_success_envelope_shape() {
        let envelope = RelayEnvelope::success(
            "API1 processed: hi",
            "api-relay",
            DownstreamPayload::Json(json!({"message": "x"})),
        );
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "API1 processed: hi");
        assert_eq!(value["processed_by"], "api-relay");
        assert_eq!(value["from_api2"], json!({"message": "x"}));
        // RFC 3339 timestamp.
        assert!(chrono::DateTime::parse_from_rfc3339(value["timestamp"].as_str().unwrap()).is_ok());
    }

    #[test]
    fn test_success_envelope_omits_absent_payload() {
        let mut envelope = RelayEnvelope::success("hello", "api-relay", DownstreamPayload::Text(String::new()));
        envelope.from_api2 = None;
        let value = serde_json::to_value(&envelope).unwrap();
        assert!(value.get("from_api2").is_none());
    }

    #[test]
    fn test_error_envelope_shape() {
        let envelope = ErrorEnvelope::new("Failed to communicate with API2: connection refused");
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["status"], "error");
        assert!(!value["error"].as_str().unwrap().is_empty());
        assert!(chrono::DateTime::parse_from_rfc3339(value["timestamp"].as_str().unwrap()).is_ok());
    }
}
