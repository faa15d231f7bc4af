//! Structural validation of catalog documents before deserialisation.
//!
//! serde stops at the first problem; catalog authors need the full list.
//! These validators walk the raw JSON and collect every violation, so a
//! failed load reports all missing/mismatched fields at once.

use std::fmt;

use serde_json::{Map, Value};

pub type ValidationResult = Result<(), Vec<SchemaViolation>>;

const METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE"];
const LOCATIONS: &[&str] = &["query", "body", "header", "path"];
const PARAM_TYPES: &[&str] = &["String", "Integer", "Boolean", "Date", "Array", "Object"];

/// One schema violation, anchored at a JSON path like
/// `endpoints[3].parameters[0].location`.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaViolation {
    pub path: String,
    pub kind: ViolationKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViolationKind {
    MissingField,
    MismatchedType {
        expected: &'static str,
        actual: &'static str,
    },
    InvalidEnumValue {
        actual: String,
        allowed: &'static [&'static str],
    },
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::MissingField => write!(f, "{}: missing required field", self.path),
            ViolationKind::MismatchedType { expected, actual } => {
                write!(f, "{}: expected {}, found {}", self.path, expected, actual)
            }
            ViolationKind::InvalidEnumValue { actual, allowed } => write!(
                f,
                "{}: invalid value '{}' (allowed: {})",
                self.path,
                actual,
                allowed.join(", ")
            ),
        }
    }
}

/// Validate the endpoint catalog document (`{"endpoints": [...]}`).
pub fn validate_endpoint_document(doc: &Value) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(endpoints) = require_array(doc, "endpoints", &mut errors) {
        for (index, entry) in endpoints.iter().enumerate() {
            let path = format!("endpoints[{}]", index);
            if let Some(endpoint) = as_object(entry, &path, &mut errors) {
                validate_endpoint(endpoint, &path, &mut errors);
            }
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate the usage-pattern document (`{"patterns": [...]}`).
pub fn validate_pattern_document(doc: &Value) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(patterns) = require_array(doc, "patterns", &mut errors) {
        for (index, entry) in patterns.iter().enumerate() {
            let path = format!("patterns[{}]", index);
            if let Some(pattern) = as_object(entry, &path, &mut errors) {
                require_str(pattern, &path, "pattern_name", &mut errors);
                require_str(pattern, &path, "description", &mut errors);
                optional_str_array(pattern, &path, "related_endpoints", &mut errors);
                optional_str_array(pattern, &path, "notes", &mut errors);
                optional_str(pattern, &path, "sample_code_path", &mut errors);
            }
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn validate_endpoint(endpoint: &Map<String, Value>, path: &str, errors: &mut Vec<SchemaViolation>) {
    for field in ["name", "name_ja", "name_en", "path", "description"] {
        require_str(endpoint, path, field, errors);
    }
    require_enum(endpoint, path, "method", METHODS, errors);
    optional_str(endpoint, path, "path_old", errors);
    optional_str(endpoint, path, "response_data_key", errors);
    for field in ["api_available", "bulk_available", "auth_required"] {
        optional_bool(endpoint, path, field, errors);
    }
    require_str_array(endpoint, path, "plan", errors);

    if let Some(parameters) = optional_array(endpoint, path, "parameters", errors) {
        for (index, entry) in parameters.iter().enumerate() {
            let param_path = format!("{}.parameters[{}]", path, index);
            if let Some(parameter) = as_object(entry, &param_path, errors) {
                require_str(parameter, &param_path, "name", errors);
                require_str(parameter, &param_path, "description", errors);
                require_bool(parameter, &param_path, "required", errors);
                require_enum(parameter, &param_path, "type", PARAM_TYPES, errors);
                require_enum(parameter, &param_path, "location", LOCATIONS, errors);
            }
        }
    }

    let response_path = format!("{}.response", path);
    match endpoint.get("response") {
        None => errors.push(missing(&response_path)),
        Some(value) => {
            if let Some(response) = as_object(value, &response_path, errors) {
                require_str(response, &response_path, "description", errors);
                if let Some(fields) = optional_array(response, &response_path, "fields", errors) {
                    for (index, entry) in fields.iter().enumerate() {
                        let field_path = format!("{}.fields[{}]", response_path, index);
                        if let Some(field) = as_object(entry, &field_path, errors) {
                            require_str(field, &field_path, "name", errors);
                            require_str(field, &field_path, "type", errors);
                            require_str(field, &field_path, "description", errors);
                        }
                    }
                }
            }
        }
    }

    let update_path = format!("{}.data_update", path);
    match endpoint.get("data_update") {
        None => errors.push(missing(&update_path)),
        Some(value) => {
            if let Some(update) = as_object(value, &update_path, errors) {
                require_str(update, &update_path, "frequency", errors);
                require_str(update, &update_path, "time", errors);
                optional_str(update, &update_path, "notes", errors);
            }
        }
    }

    if let Some(patterns) = optional_array(endpoint, path, "valid_request_patterns", errors) {
        for (index, entry) in patterns.iter().enumerate() {
            let pattern_path = format!("{}.valid_request_patterns[{}]", path, index);
            if let Some(pattern) = as_object(entry, &pattern_path, errors) {
                require_str(pattern, &pattern_path, "description", errors);
                optional_str_array(pattern, &pattern_path, "params", errors);
            }
        }
    }

    if let Some(value) = endpoint.get("pagination") {
        if !value.is_null() {
            let pagination_path = format!("{}.pagination", path);
            if let Some(pagination) = as_object(value, &pagination_path, errors) {
                require_bool(pagination, &pagination_path, "supported", errors);
                require_str(pagination, &pagination_path, "param", errors);
            }
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn missing(path: &str) -> SchemaViolation {
    SchemaViolation {
        path: path.to_string(),
        kind: ViolationKind::MissingField,
    }
}

fn mismatched(path: &str, expected: &'static str, value: &Value) -> SchemaViolation {
    SchemaViolation {
        path: path.to_string(),
        kind: ViolationKind::MismatchedType {
            expected,
            actual: json_type(value),
        },
    }
}

fn as_object<'a>(
    value: &'a Value,
    path: &str,
    errors: &mut Vec<SchemaViolation>,
) -> Option<&'a Map<String, Value>> {
    match value.as_object() {
        Some(object) => Some(object),
        None => {
            errors.push(mismatched(path, "object", value));
            None
        }
    }
}

fn require_array<'a>(
    doc: &'a Value,
    field: &str,
    errors: &mut Vec<SchemaViolation>,
) -> Option<&'a Vec<Value>> {
    let root = match as_object(doc, "$", errors) {
        Some(root) => root,
        None => return None,
    };
    match root.get(field) {
        None => {
            errors.push(missing(field));
            None
        }
        Some(value) => match value.as_array() {
            Some(array) => Some(array),
            None => {
                errors.push(mismatched(field, "array", value));
                None
            }
        },
    }
}

fn require_str(
    object: &Map<String, Value>,
    base: &str,
    field: &str,
    errors: &mut Vec<SchemaViolation>,
) {
    let path = format!("{}.{}", base, field);
    match object.get(field) {
        None => errors.push(missing(&path)),
        Some(value) if !value.is_string() => errors.push(mismatched(&path, "string", value)),
        Some(_) => {}
    }
}

fn optional_str(
    object: &Map<String, Value>,
    base: &str,
    field: &str,
    errors: &mut Vec<SchemaViolation>,
) {
    if let Some(value) = object.get(field) {
        if !value.is_string() && !value.is_null() {
            errors.push(mismatched(&format!("{}.{}", base, field), "string", value));
        }
    }
}

fn require_bool(
    object: &Map<String, Value>,
    base: &str,
    field: &str,
    errors: &mut Vec<SchemaViolation>,
) {
    let path = format!("{}.{}", base, field);
    match object.get(field) {
        None => errors.push(missing(&path)),
        Some(value) if !value.is_boolean() => errors.push(mismatched(&path, "boolean", value)),
        Some(_) => {}
    }
}

fn optional_bool(
    object: &Map<String, Value>,
    base: &str,
    field: &str,
    errors: &mut Vec<SchemaViolation>,
) {
    if let Some(value) = object.get(field) {
        if !value.is_boolean() {
            errors.push(mismatched(&format!("{}.{}", base, field), "boolean", value));
        }
    }
}

fn require_enum(
    object: &Map<String, Value>,
    base: &str,
    field: &str,
    allowed: &'static [&'static str],
    errors: &mut Vec<SchemaViolation>,
) {
    let path = format!("{}.{}", base, field);
    match object.get(field) {
        None => errors.push(missing(&path)),
        Some(value) => match value.as_str() {
            None => errors.push(mismatched(&path, "string", value)),
            Some(text) if !allowed.contains(&text) => errors.push(SchemaViolation {
                path,
                kind: ViolationKind::InvalidEnumValue {
                    actual: text.to_string(),
                    allowed,
                },
            }),
            Some(_) => {}
        },
    }
}

fn require_str_array(
    object: &Map<String, Value>,
    base: &str,
    field: &str,
    errors: &mut Vec<SchemaViolation>,
) {
    let path = format!("{}.{}", base, field);
    match object.get(field) {
        None => errors.push(missing(&path)),
        Some(value) => check_str_array(value, &path, errors),
    }
}

fn optional_str_array(
    object: &Map<String, Value>,
    base: &str,
    field: &str,
    errors: &mut Vec<SchemaViolation>,
) {
    if let Some(value) = object.get(field) {
        check_str_array(value, &format!("{}.{}", base, field), errors);
    }
}

fn check_str_array(value: &Value, path: &str, errors: &mut Vec<SchemaViolation>) {
    match value.as_array() {
        None => errors.push(mismatched(path, "array", value)),
        Some(entries) => {
            for (index, entry) in entries.iter().enumerate() {
                if !entry.is_string() {
                    errors.push(mismatched(&format!("{}[{}]", path, index), "string", entry));
                }
            }
        }
    }
}

fn optional_array<'a>(
    object: &'a Map<String, Value>,
    base: &str,
    field: &str,
    errors: &mut Vec<SchemaViolation>,
) -> Option<&'a Vec<Value>> {
    match object.get(field) {
        None => None,
        Some(value) => match value.as_array() {
            Some(array) => Some(array),
            None => {
                errors.push(mismatched(&format!("{}.{}", base, field), "array", value));
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn minimal_endpoint() -> Value {
        json!({
            "name": "eq-master",
            "name_ja": "株式マスタ",
            "name_en": "Equity Master",
            "path": "/equities/master",
            "method": "GET",
            "description": "上場銘柄の一覧を取得します。",
            "response": {"description": "銘柄一覧"},
            "plan": ["standard"],
            "data_update": {"frequency": "日次", "time": "07:00"}
        })
    }

    #[test]
    fn test_validate_minimal_endpoint_ok() {
        let doc = json!({"endpoints": [minimal_endpoint()]});
        assert!(validate_endpoint_document(&doc).is_ok());
    }

    #[test]
    fn test_validate_collects_every_violation() {
        let mut endpoint = minimal_endpoint();
        let object = endpoint.as_object_mut().unwrap();
        object.remove("name");
        object.remove("description");
        object.insert("method".into(), json!("FETCH"));

        let doc = json!({"endpoints": [endpoint]});
        let errors = validate_endpoint_document(&doc).unwrap_err();

        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.path == "endpoints[0].name"));
        assert!(errors.iter().any(|e| e.path == "endpoints[0].description"));
        assert_matches!(
            &errors.iter().find(|e| e.path == "endpoints[0].method").unwrap().kind,
            ViolationKind::InvalidEnumValue { actual, allowed }
                if actual == "FETCH" && *allowed == METHODS
        );
    }

    #[test]
    fn test_validate_parameter_location_membership() {
        let mut endpoint = minimal_endpoint();
        endpoint.as_object_mut().unwrap().insert(
            "parameters".into(),
            json!([{
                "name": "code",
                "type": "String",
                "required": false,
                "description": "銘柄コード",
                "location": "cookie"
            }]),
        );

        let doc = json!({"endpoints": [endpoint]});
        let errors = validate_endpoint_document(&doc).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "endpoints[0].parameters[0].location");
        assert_matches!(
            &errors[0].kind,
            ViolationKind::InvalidEnumValue { actual, .. } if actual == "cookie"
        );
    }

    #[test]
    fn test_validate_mismatched_types_reported_with_both_sides() {
        let mut endpoint = minimal_endpoint();
        endpoint
            .as_object_mut()
            .unwrap()
            .insert("plan".into(), json!("standard"));

        let doc = json!({"endpoints": [endpoint]});
        let errors = validate_endpoint_document(&doc).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_matches!(
            &errors[0].kind,
            ViolationKind::MismatchedType { expected: "array", actual: "string" }
        );
        assert_eq!(
            errors[0].to_string(),
            "endpoints[0].plan: expected array, found string"
        );
    }

    #[test]
    fn test_validate_missing_endpoints_key() {
        let errors = validate_endpoint_document(&json!({})).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_matches!(errors[0].kind, ViolationKind::MissingField);
    }

    #[test]
    fn test_validate_pattern_document() {
        let doc = json!({"patterns": [
            {"pattern_name": "pagination", "description": "全件取得のループ"},
            {"pattern_name": "rate-limit", "description": 3}
        ]});
        let errors = validate_pattern_document(&doc).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "patterns[1].description");
    }

    #[test]
    fn test_validate_null_pagination_is_accepted() {
        let mut endpoint = minimal_endpoint();
        endpoint
            .as_object_mut()
            .unwrap()
            .insert("pagination".into(), Value::Null);

        let doc = json!({"endpoints": [endpoint]});
        assert!(validate_endpoint_document(&doc).is_ok());
    }
}
