//! Sample-code generation from endpoint parameter metadata.
//!
//! The generator classifies every declared parameter (api-key, sensitive
//! credential, or plain), derives environment-variable bindings for
//! credentials, escapes target-language reserved words, picks example
//! literals, buckets parameters by location and requiredness, and renders a
//! runnable program for the requested language. Python is the only target
//! today; the context/renderer split keeps the door open for more.

mod python;

use std::fmt;

use convert_case::{Case, Casing};
use log::info;

use crate::model::{Endpoint, EndpointCollection, ParamLocation, ParamType};

/// Languages the generator can render.
pub const SUPPORTED_LANGUAGES: &[&str] = &["python"];

/// Prefix for derived credential environment variables.
const ENV_PREFIX: &str = "JQUANTS_";

const API_KEY_KEYWORDS: &[&str] = &["apikey", "api-key"];

const SENSITIVE_KEYWORDS: &[&str] = &[
    "password",
    "secret",
    "key",
    "credential",
    "mailaddress",
    "email",
    "mail",
    "token",
    "idtoken",
    "refreshtoken",
];

// Python reserved words that would shadow a parameter name.
const PYTHON_KEYWORDS: &[&str] = &[
    "from", "to", "in", "is", "if", "for", "while", "def", "class", "return", "import", "as",
    "with", "try", "except", "raise", "pass", "break", "continue", "yield", "lambda", "global",
    "nonlocal", "assert",
];

#[derive(Debug)]
pub enum CodegenError {
    /// The requested language is not in [`SUPPORTED_LANGUAGES`].
    UnsupportedLanguage { requested: String },
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::UnsupportedLanguage { requested } => write!(
                f,
                "Language '{}' is not supported. Supported languages: {}.",
                requested,
                SUPPORTED_LANGUAGES.join(", ")
            ),
        }
    }
}

impl std::error::Error for CodegenError {}

impl CodegenError {
    pub fn kind_name(&self) -> &'static str {
        match self {
            CodegenError::UnsupportedLanguage { .. } => "UnsupportedLanguage",
        }
    }
}

/// One parameter, fully classified for rendering.
#[derive(Debug, Clone)]
pub(crate) struct ParamSpec {
    /// Local identifier in the generated program (reserved words escaped).
    pub name: String,
    /// Wire name used when building the request payload.
    pub original_name: String,
    pub python_type: &'static str,
    pub description: String,
    pub location: ParamLocation,
    pub required: bool,
    /// A target-language literal, quotes included where needed.
    pub example_value: String,
    pub is_sensitive: bool,
    pub is_api_key: bool,
    pub env_var_name: Option<String>,
}

/// Everything a renderer needs for one endpoint.
#[derive(Debug)]
pub(crate) struct RenderContext<'a> {
    pub endpoint: &'a Endpoint,
    pub function_name: String,
    pub required_params: Vec<ParamSpec>,
    pub optional_params: Vec<ParamSpec>,
    pub query_params: Vec<ParamSpec>,
    pub header_params: Vec<ParamSpec>,
    pub body_params: Vec<ParamSpec>,
    pub has_sensitive_params: bool,
    pub non_sensitive_required_params: Vec<ParamSpec>,
    pub has_pagination: bool,
    pub response_data_key: String,
}

/// Generate a runnable sample program for the named endpoint.
///
/// Returns `Ok(None)` when the endpoint does not exist (first match in
/// collection order wins). The extra parameter map is reserved for future
/// use and currently ignored.
pub fn generate_sample_code(
    collection: &EndpointCollection,
    endpoint_name: &str,
    language: &str,
    _params: Option<&serde_json::Value>,
) -> Result<Option<String>, CodegenError> {
    info!(
        "generate_sample_code: endpoint_name='{}', language='{}'",
        endpoint_name, language
    );

    let normalized = language.trim().to_lowercase();
    if !SUPPORTED_LANGUAGES.contains(&normalized.as_str()) {
        return Err(CodegenError::UnsupportedLanguage {
            requested: language.to_string(),
        });
    }

    let endpoint = match collection.find(endpoint_name) {
        Some(endpoint) => endpoint,
        None => return Ok(None),
    };

    let context = build_context(endpoint);
    Ok(Some(python::render(&context)))
}

fn build_context(endpoint: &Endpoint) -> RenderContext<'_> {
    let mut required_params = Vec::new();
    let mut optional_params = Vec::new();
    let mut query_params = Vec::new();
    let mut header_params = Vec::new();
    let mut body_params = Vec::new();

    for parameter in &endpoint.parameters {
        // the pagination key is handled structurally by the render, never as
        // a plain argument
        if parameter.name == "pagination_key" {
            continue;
        }

        let is_api_key = is_api_key_param(&parameter.name);
        let is_sensitive = is_sensitive_param(&parameter.name);

        let spec = ParamSpec {
            name: escape_reserved_word(&parameter.name),
            original_name: parameter.name.clone(),
            python_type: python_type(parameter.r#type),
            description: parameter.description.clone(),
            location: parameter.location,
            required: parameter.required,
            example_value: example_value(parameter.r#type, &parameter.name),
            is_sensitive,
            is_api_key,
            env_var_name: is_sensitive.then(|| env_var_name(&parameter.name)),
        };

        match spec.location {
            ParamLocation::Query => query_params.push(spec.clone()),
            ParamLocation::Header => header_params.push(spec.clone()),
            ParamLocation::Body => body_params.push(spec.clone()),
            ParamLocation::Path => {}
        }
        if spec.required {
            required_params.push(spec);
        } else {
            optional_params.push(spec);
        }
    }

    let has_sensitive_params = required_params.iter().any(|p| p.is_sensitive);
    let non_sensitive_required_params: Vec<ParamSpec> = required_params
        .iter()
        .filter(|p| !p.is_sensitive)
        .cloned()
        .collect();

    RenderContext {
        endpoint,
        function_name: endpoint.name.replace('-', "_"),
        required_params,
        optional_params,
        query_params,
        header_params,
        body_params,
        has_sensitive_params,
        non_sensitive_required_params,
        has_pagination: endpoint.supports_pagination(),
        response_data_key: endpoint.response_data_key.clone().unwrap_or_default(),
    }
}

/// Api-key parameters carry a request-scoped key and are classified apart
/// from long-lived credentials.
fn is_api_key_param(name: &str) -> bool {
    let lower = name.to_lowercase();
    API_KEY_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Sensitive parameters are long-lived credentials sourced from the
/// environment. The api-key check takes precedence even though "key" would
/// match here too.
fn is_sensitive_param(name: &str) -> bool {
    if is_api_key_param(name) {
        return false;
    }
    let lower = name.to_lowercase();
    SENSITIVE_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Derived environment variable: camel case to upper snake, namespaced.
fn env_var_name(name: &str) -> String {
    format!("{}{}", ENV_PREFIX, name.to_case(Case::UpperSnake))
}

/// Reserved words get a trailing underscore as local identifier; the wire
/// name stays untouched.
fn escape_reserved_word(name: &str) -> String {
    if PYTHON_KEYWORDS.contains(&name.to_lowercase().as_str()) {
        format!("{}_", name)
    } else {
        name.to_string()
    }
}

fn python_type(ty: ParamType) -> &'static str {
    match ty {
        ParamType::String => "str",
        ParamType::Integer => "int",
        ParamType::Boolean => "bool",
        ParamType::Date => "str",
        ParamType::Array => "list",
        ParamType::Object => "dict",
    }
}

/// Example literal for a parameter, by name heuristic first, then by type.
fn example_value(ty: ParamType, name: &str) -> String {
    let lower = name.to_lowercase();
    if lower.contains("date") || lower.contains("from") || lower.contains("to") {
        return "\"20230101\"".to_string();
    }
    if lower.contains("code") {
        // Nikkei 225 index code
        return "\"27800\"".to_string();
    }
    match ty {
        ParamType::Integer => "1".to_string(),
        ParamType::Boolean => "True".to_string(),
        _ => format!("\"{}_value\"", name),
    }
}
