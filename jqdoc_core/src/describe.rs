//! Full detail projection for a single endpoint.

use log::debug;
use serde::Serialize;

use crate::model::{
    Endpoint, EndpointCollection, Pagination, ParamLocation, ParamType, ResponseSummary,
    ValidRequestPattern,
};

/// A parameter as shown in the detail view. The required flag is implied by
/// the partition the parameter sits in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterView {
    pub name: String,
    pub r#type: ParamType,
    pub description: String,
    pub location: ParamLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartitionedParameters {
    pub required: Vec<ParameterView>,
    pub optional: Vec<ParameterView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataUpdateView {
    pub frequency: String,
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The detail view of one endpoint.
///
/// `api_available` defaults to true while `bulk_available` defaults to false
/// when the source omits them; the asymmetry is part of the catalog contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointDetail {
    pub name: String,
    pub name_ja: String,
    pub name_en: String,
    pub path: String,
    pub method: String,
    pub description: String,
    pub api_available: bool,
    pub bulk_available: bool,
    pub parameters: PartitionedParameters,
    pub response: ResponseSummary,
    pub auth_required: bool,
    pub plan: Vec<String>,
    pub data_update: DataUpdateView,
    pub valid_request_patterns: Vec<ValidRequestPattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_old: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_data_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Look up an endpoint by exact internal name (first match in collection
/// order wins) and project its detail view. Returns `None` when absent; the
/// caller maps that to a not-found payload.
pub fn describe_endpoint(collection: &EndpointCollection, name: &str) -> Option<EndpointDetail> {
    debug!("describe_endpoint: name='{}'", name);
    collection.find(name).map(build_detail)
}

fn build_detail(endpoint: &Endpoint) -> EndpointDetail {
    let mut required = Vec::new();
    let mut optional = Vec::new();
    for parameter in &endpoint.parameters {
        let view = ParameterView {
            name: parameter.name.clone(),
            r#type: parameter.r#type,
            description: parameter.description.clone(),
            location: parameter.location,
        };
        if parameter.required {
            required.push(view);
        } else {
            optional.push(view);
        }
    }

    // notes only surfaces when non-empty
    let notes = endpoint
        .data_update
        .notes
        .as_deref()
        .filter(|notes| !notes.is_empty())
        .map(str::to_string);

    EndpointDetail {
        name: endpoint.name.clone(),
        name_ja: endpoint.name_ja.clone(),
        name_en: endpoint.name_en.clone(),
        path: endpoint.path.clone(),
        method: endpoint.method.to_string(),
        description: endpoint.description.clone(),
        api_available: endpoint.api_available,
        bulk_available: endpoint.bulk_available,
        parameters: PartitionedParameters { required, optional },
        response: endpoint.response.clone(),
        auth_required: endpoint.auth_required,
        plan: endpoint.plan.clone(),
        data_update: DataUpdateView {
            frequency: endpoint.data_update.frequency.clone(),
            time: endpoint.data_update.time.clone(),
            notes,
        },
        valid_request_patterns: endpoint.valid_request_patterns.clone(),
        path_old: endpoint.path_old.clone(),
        response_data_key: endpoint.response_data_key.clone(),
        pagination: endpoint.pagination.clone(),
    }
}
