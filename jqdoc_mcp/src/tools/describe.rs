//! Endpoint detail tool.

use jqdoc_core::describe::describe_endpoint;
use jqdoc_core::errors::{internal_error, not_found_error};
use jqdoc_core::loader::DataDir;
use log::debug;
use rmcp::model::CallToolResult;
use rmcp::schemars;

use super::{error_result, require_non_blank, success_json};

pub(crate) const SEARCH_SUGGESTION: &str =
    "Use the search_endpoints tool to find valid endpoint names.";

/// Parameters for the describe_endpoint tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DescribeEndpointParams {
    /// Internal endpoint name (e.g. "eq-master", "eq-bars-daily").
    pub endpoint_name: String,
}

/// Execute the describe_endpoint tool.
pub fn execute(data: &DataDir, params: &DescribeEndpointParams) -> CallToolResult {
    debug!(
        "Tool: describe_endpoint, endpoint_name='{}'",
        params.endpoint_name
    );

    let endpoint_name = match require_non_blank("endpoint_name", &params.endpoint_name) {
        Ok(name) => name,
        Err(payload) => return error_result(&payload),
    };

    let endpoints = match data.load_endpoints() {
        Ok(endpoints) => endpoints,
        Err(e) => {
            return error_result(&internal_error(
                "endpoint description",
                e.kind_name(),
                &e.to_string(),
            ));
        }
    };

    match describe_endpoint(&endpoints, &endpoint_name) {
        Some(detail) => success_json(&detail),
        None => error_result(&not_found_error(
            "Endpoint",
            &endpoint_name,
            Some(SEARCH_SUGGESTION),
        )),
    }
}
