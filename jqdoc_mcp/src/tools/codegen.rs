//! Sample-code generation tool.

use jqdoc_core::codegen::{CodegenError, generate_sample_code};
use jqdoc_core::errors::{internal_error, not_found_error, validation_error};
use jqdoc_core::loader::DataDir;
use log::debug;
use rmcp::model::{CallToolResult, Content};
use rmcp::schemars;
use serde_json::Value;

use super::describe::SEARCH_SUGGESTION;
use super::{error_result, require_non_blank};

fn default_language() -> String {
    "python".to_string()
}

/// Parameters for the generate_sample_code tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GenerateSampleCodeParams {
    /// Internal endpoint name (e.g. "eq-master", "eq-bars-daily").
    pub endpoint_name: String,

    /// Target language. Currently only "python" is supported.
    #[serde(default = "default_language")]
    pub language: String,

    /// Extra generation options. Reserved for future use.
    #[serde(default)]
    pub params: Option<Value>,
}

/// Execute the generate_sample_code tool. The generated program is returned
/// as plain source text, not JSON.
pub fn execute(data: &DataDir, params: &GenerateSampleCodeParams) -> CallToolResult {
    debug!(
        "Tool: generate_sample_code, endpoint_name='{}', language='{}'",
        params.endpoint_name, params.language
    );

    let endpoint_name = match require_non_blank("endpoint_name", &params.endpoint_name) {
        Ok(name) => name,
        Err(payload) => return error_result(&payload),
    };
    let language = params.language.trim().to_lowercase();

    let endpoints = match data.load_endpoints() {
        Ok(endpoints) => endpoints,
        Err(e) => {
            return error_result(&internal_error(
                "sample code generation",
                e.kind_name(),
                &e.to_string(),
            ));
        }
    };

    match generate_sample_code(&endpoints, &endpoint_name, &language, params.params.as_ref()) {
        Ok(Some(code)) => CallToolResult::success(vec![Content::text(code)]),
        Ok(None) => error_result(&not_found_error(
            "Endpoint",
            &endpoint_name,
            Some(SEARCH_SUGGESTION),
        )),
        Err(e @ CodegenError::UnsupportedLanguage { .. }) => {
            error_result(&validation_error("language", &e.to_string()))
        }
    }
}
