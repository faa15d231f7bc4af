//! Health check tool.

use rmcp::model::CallToolResult;
use rmcp::schemars;
use serde_json::json;

use super::success_json;

/// Parameters for the health_check tool.
/// This tool takes no parameters.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct HealthCheckParams {}

/// Execute the health_check tool.
pub fn execute(_params: &HealthCheckParams) -> CallToolResult {
    success_json(&json!({
        "status": "healthy",
        "service": "jqdoc-mcp",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
