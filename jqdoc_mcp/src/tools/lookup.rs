//! Property reference-data lookup tool.

use jqdoc_core::errors::internal_error;
use jqdoc_core::loader::DataDir;
use jqdoc_core::lookup::lookup_property;
use log::debug;
use rmcp::model::CallToolResult;
use rmcp::schemars;

use super::{error_result, optional_non_blank, require_non_blank, success_json};

/// Parameters for the lookup_property tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct LookupPropertyParams {
    /// Request/response property name (e.g. "Mkt", "S17", "HolidayDivision").
    pub property_name: String,

    /// Optional endpoint name restricting where the property must exist
    /// (e.g. "eq-master").
    #[serde(default)]
    pub endpoint_name: Option<String>,
}

/// Execute the lookup_property tool.
pub fn execute(data: &DataDir, params: &LookupPropertyParams) -> CallToolResult {
    debug!(
        "Tool: lookup_property, property_name='{}', endpoint_name={:?}",
        params.property_name, params.endpoint_name
    );

    let property_name = match require_non_blank("property_name", &params.property_name) {
        Ok(name) => name,
        Err(payload) => return error_result(&payload),
    };
    let endpoint_name = match optional_non_blank("endpoint_name", params.endpoint_name.as_deref())
    {
        Ok(name) => name,
        Err(payload) => return error_result(&payload),
    };

    let endpoints = match data.load_endpoints() {
        Ok(endpoints) => endpoints,
        Err(e) => {
            return error_result(&internal_error(
                "property lookup",
                e.kind_name(),
                &e.to_string(),
            ));
        }
    };
    let reference = match data.load_reference_data() {
        Ok(reference) => reference,
        Err(e) => {
            return error_result(&internal_error(
                "property lookup",
                e.kind_name(),
                &e.to_string(),
            ));
        }
    };

    success_json(&lookup_property(
        &endpoints,
        &reference,
        &property_name,
        endpoint_name.as_deref(),
    ))
}
