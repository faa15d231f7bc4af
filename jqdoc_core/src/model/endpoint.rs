use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Declared type of a request parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamType {
    String,
    Integer,
    Boolean,
    Date,
    Array,
    Object,
}

/// Where a parameter travels in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    Query,
    Body,
    Header,
    Path,
}

/// One declared request parameter of an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub r#type: ParamType,
    pub required: bool,
    pub description: String,
    pub location: ParamLocation,
}

/// One field of an endpoint's response summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseField {
    pub name: String,
    pub r#type: String,
    pub description: String,
}

/// Summary of what an endpoint returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSummary {
    pub description: String,
    #[serde(default)]
    pub fields: Vec<ResponseField>,
}

/// How and when the underlying data set is refreshed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataUpdate {
    pub frequency: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One legal combination of parameters, documented but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidRequestPattern {
    #[serde(default)]
    pub params: Vec<String>,
    pub description: String,
}

/// Pagination support of an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub supported: bool,
    pub param: String,
}

/// One documented operation of the J-Quants API.
///
/// Constructed once at load time and never mutated. The internal `name` is
/// the lookup key across the collection; uniqueness is not enforced, so every
/// lookup takes the first match in collection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    pub name: String,
    pub name_ja: String,
    pub name_en: String,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_old: Option<String>,
    pub method: HttpMethod,
    pub description: String,
    #[serde(default = "default_true")]
    pub api_available: bool,
    #[serde(default)]
    pub bulk_available: bool,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    pub response: ResponseSummary,
    #[serde(default = "default_true")]
    pub auth_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_data_key: Option<String>,
    pub plan: Vec<String>,
    pub data_update: DataUpdate,
    #[serde(default)]
    pub valid_request_patterns: Vec<ValidRequestPattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl Endpoint {
    /// True when the endpoint declares a raw `pagination_key` parameter.
    pub fn supports_pagination(&self) -> bool {
        self.parameters.iter().any(|p| p.name == "pagination_key")
    }
}

/// The root of the endpoint catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointCollection {
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

impl EndpointCollection {
    /// First endpoint with the given internal name, in collection order.
    pub fn find(&self, name: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.name == name)
    }
}

fn default_true() -> bool {
    true
}
