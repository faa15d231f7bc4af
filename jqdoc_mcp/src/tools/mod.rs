//! MCP tool implementations for the documentation server.
//!
//! Each module holds one tool: its schemars parameter struct and an
//! `execute` function that validates the raw input, loads the documents it
//! needs, calls the core engine and serialises the outcome. Failures always
//! come back as the uniform `{error, error_type, message, details}` payload.

pub mod codegen;
pub mod describe;
pub mod health;
pub mod lookup;
pub mod qa;
pub mod search;

pub use codegen::GenerateSampleCodeParams;
pub use describe::DescribeEndpointParams;
pub use health::HealthCheckParams;
pub use lookup::LookupPropertyParams;
pub use qa::AnswerQuestionParams;
pub use search::SearchEndpointsParams;

use jqdoc_core::errors::{ErrorPayload, internal_error, validation_error};
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

/// Serialise a success payload as pretty JSON text content.
pub(crate) fn success_json(value: &impl Serialize) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => error_result(&internal_error(
            "result serialization",
            "Serialize",
            &e.to_string(),
        )),
    }
}

/// Serialise an error payload as error content.
pub(crate) fn error_result(payload: &ErrorPayload) -> CallToolResult {
    let text = serde_json::to_string_pretty(payload)
        .unwrap_or_else(|_| payload.message.clone());
    CallToolResult::error(vec![Content::text(text)])
}

/// Trim a required free-text input; empty after trimming is a validation
/// failure.
pub(crate) fn require_non_blank(field: &str, value: &str) -> Result<String, ErrorPayload> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(validation_error(field, "must not be empty or whitespace"))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Trim an optional free-text input; a supplied-but-blank value is a
/// validation failure, absence is fine.
pub(crate) fn optional_non_blank(
    field: &str,
    value: Option<&str>,
) -> Result<Option<String>, ErrorPayload> {
    match value {
        None => Ok(None),
        Some(value) => require_non_blank(field, value).map(Some),
    }
}
