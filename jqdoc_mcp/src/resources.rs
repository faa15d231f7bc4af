//! Resource handling for the documentation MCP server.
//!
//! Two read-only documents are exposed:
//! - `jquants://api_specification` - the full validated endpoint catalog
//! - `jquants://common_patterns` - usage patterns with sample code inlined

use jqdoc_core::loader::DataDir;
use log::{debug, error, warn};
use rmcp::model::{AnnotateAble, RawResource, Resource};
use serde_json::{Value, json};

/// URI of the endpoint catalog resource.
pub const API_SPECIFICATION_URI: &str = "jquants://api_specification";

/// URI of the usage-pattern catalog resource.
pub const COMMON_PATTERNS_URI: &str = "jquants://common_patterns";

/// The resources this server exposes.
pub fn list_resources() -> Vec<Resource> {
    vec![
        document_resource(
            API_SPECIFICATION_URI,
            "api_specification",
            "Full specification of every J-Quants API endpoint.",
        ),
        document_resource(
            COMMON_PATTERNS_URI,
            "common_patterns",
            "Common implementation patterns (authentication, pagination, rate limits) with sample code.",
        ),
    ]
}

fn document_resource(uri: &str, name: &str, description: &str) -> Resource {
    RawResource {
        uri: uri.to_string(),
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        mime_type: Some("application/json".to_string()),
        size: None,
        icons: None,
        meta: None,
    }
    .no_annotation()
}

/// The endpoint catalog as pretty JSON, absent optional fields omitted.
/// A failed load is reported inside the document, never as a panic.
pub fn api_specification(data: &DataDir) -> String {
    debug!("Resource: {}", API_SPECIFICATION_URI);

    match data.load_endpoints() {
        Ok(collection) => match serde_json::to_string_pretty(&collection) {
            Ok(text) => text,
            Err(e) => error_document(&e.to_string()),
        },
        Err(e) => {
            error!("Failed to load API specification: {}", e);
            error_document(&e.to_string())
        }
    }
}

/// The pattern catalog as pretty JSON. Declared sample-code files are
/// inlined as a `sample_code` field; a file that cannot be read is logged
/// and the field omitted, without failing the whole resource.
pub fn common_patterns(data: &DataDir) -> String {
    debug!("Resource: {}", COMMON_PATTERNS_URI);

    let collection = match data.load_patterns() {
        Ok(collection) => collection,
        Err(e) => {
            error!("Failed to load common patterns: {}", e);
            return error_document(&e.to_string());
        }
    };

    let mut patterns: Vec<Value> = Vec::new();
    for pattern in &collection.patterns {
        let mut entry = match serde_json::to_value(pattern) {
            Ok(entry) => entry,
            Err(e) => return error_document(&e.to_string()),
        };

        if let Some(sample_code_path) = &pattern.sample_code_path {
            match data.load_sample_code(sample_code_path) {
                Ok(sample_code) => {
                    if let Some(object) = entry.as_object_mut() {
                        object.insert("sample_code".to_string(), json!(sample_code));
                    }
                }
                Err(e) => {
                    warn!(
                        "Failed to load sample code for {}: {}",
                        pattern.pattern_name, e
                    );
                }
            }
        }
        patterns.push(entry);
    }

    let document = json!({ "patterns": patterns });
    serde_json::to_string_pretty(&document).unwrap_or_else(|e| error_document(&e.to_string()))
}

fn error_document(message: &str) -> String {
    json!({ "error": message }).to_string()
}
