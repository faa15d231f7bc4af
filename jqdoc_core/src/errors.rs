//! The uniform error payload returned by every tool.
//!
//! Three kinds: `ValidationError` for malformed caller input (caught at the
//! boundary, before any engine runs), `NotFoundError` for well-formed input
//! naming something that does not exist, and `InternalError` for everything
//! else (data loads, rendering). Payloads carry a human-readable message and
//! a machine-readable details map; callers never see a raw error or a
//! backtrace.

use serde::Serialize;
use serde_json::{Map, Value, json};

/// The three user-visible failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    ValidationError,
    NotFoundError,
    InternalError,
}

/// Structured failure payload: `{error, error_type, message, details}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub error: bool,
    pub error_type: ErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub details: Map<String, Value>,
}

impl ErrorPayload {
    pub fn new(error_type: ErrorKind, message: String, details: Map<String, Value>) -> Self {
        Self {
            error: true,
            error_type,
            message,
            details,
        }
    }
}

/// Payload for a rejected input parameter.
pub fn validation_error(field: &str, message: &str) -> ErrorPayload {
    let mut details = Map::new();
    details.insert("field".into(), json!(field));
    details.insert("validation_error".into(), json!(message));
    ErrorPayload::new(
        ErrorKind::ValidationError,
        format!("Validation failed for input parameter '{}': {}", field, message),
        details,
    )
}

/// Payload for a missing resource. The suggestion is appended to the message
/// when present.
pub fn not_found_error(
    resource_type: &str,
    identifier: &str,
    suggestion: Option<&str>,
) -> ErrorPayload {
    let mut message = format!("{} '{}' was not found.", resource_type, identifier);
    if let Some(suggestion) = suggestion {
        message.push(' ');
        message.push_str(suggestion);
    }

    let mut details = Map::new();
    details.insert("resource_type".into(), json!(resource_type));
    details.insert("identifier".into(), json!(identifier));
    details.insert("suggestion".into(), json!(suggestion));
    ErrorPayload::new(ErrorKind::NotFoundError, message, details)
}

/// Payload for an unexpected failure. Wraps the cause's message and kind for
/// diagnostics without exposing internals.
pub fn internal_error(operation: &str, error_class: &str, original: &str) -> ErrorPayload {
    let mut details = Map::new();
    details.insert("operation".into(), json!(operation));
    details.insert("original_error".into(), json!(original));
    details.insert("error_class".into(), json!(error_class));
    ErrorPayload::new(
        ErrorKind::InternalError,
        format!("An internal error occurred during {}.", operation),
        details,
    )
}
