//! Endpoint search tool.

use jqdoc_core::errors::internal_error;
use jqdoc_core::loader::DataDir;
use jqdoc_core::search::search_endpoints;
use log::debug;
use rmcp::model::CallToolResult;
use rmcp::schemars;

use super::{error_result, optional_non_blank, require_non_blank, success_json};

/// Parameters for the search_endpoints tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchEndpointsParams {
    /// Search keyword, matched case-insensitively against endpoint names,
    /// localized names, paths and descriptions.
    pub keyword: String,

    /// Optional category filter: the first segment of the endpoint path
    /// (e.g. "equities", "fins", "auth").
    #[serde(default)]
    pub category: Option<String>,
}

/// Execute the search_endpoints tool.
pub fn execute(data: &DataDir, params: &SearchEndpointsParams) -> CallToolResult {
    debug!(
        "Tool: search_endpoints, keyword='{}', category={:?}",
        params.keyword, params.category
    );

    let keyword = match require_non_blank("keyword", &params.keyword) {
        Ok(keyword) => keyword,
        Err(payload) => return error_result(&payload),
    };
    let category = match optional_non_blank("category", params.category.as_deref()) {
        Ok(category) => category,
        Err(payload) => return error_result(&payload),
    };

    let endpoints = match data.load_endpoints() {
        Ok(endpoints) => endpoints,
        Err(e) => {
            return error_result(&internal_error(
                "endpoint search",
                e.kind_name(),
                &e.to_string(),
            ));
        }
    };

    success_json(&search_endpoints(&endpoints, &keyword, category.as_deref()))
}
