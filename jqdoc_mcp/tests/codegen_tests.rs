mod helpers;

use helpers::{fixture_data_dir, get_json, get_text, is_error, is_success};
use jqdoc_mcp::tools::codegen::{GenerateSampleCodeParams, execute};

#[cfg(test)]
mod tests {
    use super::*;

    fn params(endpoint_name: &str, language: &str) -> GenerateSampleCodeParams {
        GenerateSampleCodeParams {
            endpoint_name: endpoint_name.to_string(),
            language: language.to_string(),
            params: None,
        }
    }

    #[test]
    fn test_generate_python_code() {
        let (_dir, data) = fixture_data_dir();

        let result = execute(&data, &params("eq-master", "python"));

        assert!(is_success(&result));
        let code = get_text(&result);
        assert!(code.contains("import httpx"));
        assert!(code.contains("def eq_master("));
        assert!(code.contains("/equities/master"));
    }

    #[test]
    fn test_language_defaults_to_python() {
        let input: GenerateSampleCodeParams =
            serde_json::from_value(serde_json::json!({"endpoint_name": "eq-master"})).unwrap();
        assert_eq!(input.language, "python");
    }

    #[test]
    fn test_language_is_case_folded() {
        let (_dir, data) = fixture_data_dir();

        let result = execute(&data, &params("eq-master", " PYTHON "));

        assert!(is_success(&result));
    }

    #[test]
    fn test_unsupported_language_is_validation_error() {
        let (_dir, data) = fixture_data_dir();

        let result = execute(&data, &params("eq-master", "ruby"));

        assert!(is_error(&result));
        let json = get_json(&result);
        assert_eq!(json["error_type"], "ValidationError");
        assert_eq!(json["details"]["field"], "language");
        let message = json["message"].as_str().unwrap();
        assert!(message.contains("'ruby'"));
        assert!(message.contains("python"));
    }

    #[test]
    fn test_unknown_endpoint_is_not_found() {
        let (_dir, data) = fixture_data_dir();

        let result = execute(&data, &params("nonexistent_endpoint", "python"));

        assert!(is_error(&result));
        let json = get_json(&result);
        assert_eq!(json["error_type"], "NotFoundError");
        assert!(json["message"].as_str().unwrap().contains("nonexistent_endpoint"));
    }

    #[test]
    fn test_pagination_is_structural_not_an_argument() {
        let (_dir, data) = fixture_data_dir();

        let result = execute(&data, &params("eq-bars-daily", "python"));

        let code = get_text(&result);
        // never a templated argument
        assert!(!code.contains("pagination_key="));
        // but the generated code loops on the pagination flag
        assert!(code.contains("while True:"));
        assert!(code.contains("payload.get(\"pagination_key\")"));
    }

    #[test]
    fn test_reserved_words_escaped_in_generated_code() {
        let (_dir, data) = fixture_data_dir();

        let result = execute(&data, &params("eq-bars-daily", "python"));

        let code = get_text(&result);
        assert!(code.contains("from_=None"));
        assert!(code.contains("params[\"from\"] = from_"));
    }

    #[test]
    fn test_sensitive_params_come_from_environment() {
        let (_dir, data) = fixture_data_dir();

        let result = execute(&data, &params("auth-user", "python"));

        let code = get_text(&result);
        assert!(code.contains("os.environ[\"JQUANTS_MAILADDRESS\"]"));
        assert!(code.contains("os.environ[\"JQUANTS_PASSWORD\"]"));
        assert!(code.contains("def auth_user():"));
    }

    #[test]
    fn test_blank_endpoint_name_is_validation_error() {
        let (_dir, data) = fixture_data_dir();

        let result = execute(&data, &params("  ", "python"));

        assert!(is_error(&result));
        assert_eq!(get_json(&result)["error_type"], "ValidationError");
    }
}
