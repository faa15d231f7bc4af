use serde::{Deserialize, Serialize};

/// One documented usage pattern (authentication flow, pagination loop, ...).
///
/// `related_endpoints` is referential only; names are not checked against the
/// endpoint collection. `sample_code_path` is relative to the templates
/// directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsagePattern {
    pub pattern_name: String,
    pub description: String,
    #[serde(default)]
    pub related_endpoints: Vec<String>,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_code_path: Option<String>,
}

/// The root of the usage-pattern document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternCollection {
    #[serde(default)]
    pub patterns: Vec<UsagePattern>,
}
