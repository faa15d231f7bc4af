//! Property-to-reference-data resolution.
//!
//! Resolution runs in two phases: first the property must exist as a
//! parameter or response field somewhere in the (optionally restricted)
//! endpoint catalog, then the reference-data document is scanned for an
//! entry whose related properties name it. A property can pass phase 1 and
//! still miss phase 2; that outcome means the property accepts free-form
//! values.

use log::debug;
use serde::Serialize;
use serde_json::{Value, json};

use crate::model::EndpointCollection;

/// The matched reference-data entry. Fields mirror the untyped document, so
/// they stay `Value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceMatch {
    pub name: Value,
    pub description: Value,
    pub endpoint: Value,
    pub direction: Value,
    pub fields: Value,
    pub values: Value,
}

/// Outcome of a property lookup. `reference_data` is always present and null
/// when nothing matched; `endpoint_name` is echoed only when the caller
/// scoped the lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupResult {
    pub found: bool,
    pub property_name: String,
    pub property_exists: bool,
    pub reference_data: Option<ReferenceMatch>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_name: Option<String>,
}

/// Resolve a property name against the endpoint catalog and the
/// reference-data document.
pub fn lookup_property(
    endpoints: &EndpointCollection,
    reference: &Value,
    property_name: &str,
    endpoint_name: Option<&str>,
) -> LookupResult {
    debug!(
        "lookup_property: property_name='{}', endpoint_name={:?}",
        property_name, endpoint_name
    );

    if !property_exists(endpoints, property_name, endpoint_name) {
        let scope = endpoint_name
            .map(|name| format!(" on endpoint '{}'", name))
            .unwrap_or_default();
        return LookupResult {
            found: false,
            property_name: property_name.to_string(),
            property_exists: false,
            reference_data: None,
            message: format!(
                "Property '{}' does not exist as a parameter{}.",
                property_name, scope
            ),
            endpoint_name: endpoint_name.map(str::to_string),
        };
    }

    match find_reference_entry(reference, property_name, endpoint_name) {
        Some(matched) => LookupResult {
            found: true,
            property_name: property_name.to_string(),
            property_exists: true,
            reference_data: Some(matched),
            message: format!(
                "Reference data related to property '{}' was found.",
                property_name
            ),
            endpoint_name: endpoint_name.map(str::to_string),
        },
        None => LookupResult {
            found: false,
            property_name: property_name.to_string(),
            property_exists: true,
            reference_data: None,
            message: format!(
                "No reference data is registered for property '{}'. \
                 The property is not tied to a fixed value set and accepts free-form values.",
                property_name
            ),
            endpoint_name: endpoint_name.map(str::to_string),
        },
    }
}

/// Phase 1: does the property exist as a parameter or response field,
/// case-insensitively, in the (optionally restricted) catalog?
fn property_exists(
    endpoints: &EndpointCollection,
    property_name: &str,
    endpoint_name: Option<&str>,
) -> bool {
    for endpoint in &endpoints.endpoints {
        if let Some(restricted) = endpoint_name {
            if endpoint.name != restricted {
                continue;
            }
        }

        if endpoint
            .parameters
            .iter()
            .any(|p| p.name.eq_ignore_ascii_case(property_name))
        {
            return true;
        }
        if endpoint
            .response
            .fields
            .iter()
            .any(|f| f.name.eq_ignore_ascii_case(property_name))
        {
            return true;
        }
    }
    false
}

/// Phase 2: scan reference-data entries for a related property with the
/// given name. When an endpoint name is supplied, the related property's
/// declared endpoint must equal it exactly. First matching entry wins.
fn find_reference_entry(
    reference: &Value,
    property_name: &str,
    endpoint_name: Option<&str>,
) -> Option<ReferenceMatch> {
    let entries = reference.get("reference_data")?.as_array()?;

    for entry in entries {
        let related = entry
            .get("related_properties")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        for related_property in related {
            let name = related_property
                .get("property")
                .and_then(Value::as_str)
                .unwrap_or("");
            if !name.eq_ignore_ascii_case(property_name) {
                continue;
            }
            if let Some(restricted) = endpoint_name {
                let declared = related_property
                    .get("endpoint")
                    .and_then(Value::as_str)
                    .unwrap_or("");
                if declared != restricted {
                    continue;
                }
            }

            return Some(ReferenceMatch {
                name: entry.get("name").cloned().unwrap_or(Value::Null),
                description: entry.get("description").cloned().unwrap_or(Value::Null),
                endpoint: related_property
                    .get("endpoint")
                    .cloned()
                    .unwrap_or(Value::Null),
                direction: related_property
                    .get("direction")
                    .cloned()
                    .unwrap_or(Value::Null),
                fields: entry.get("fields").cloned().unwrap_or_else(|| json!([])),
                values: entry
                    .get("reference_data")
                    .cloned()
                    .unwrap_or_else(|| json!([])),
            });
        }
    }
    None
}
