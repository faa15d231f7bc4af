mod helpers;

use helpers::{empty_data_dir, fixture_data_dir};
use jqdoc_mcp::resources::{api_specification, common_patterns};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_specification_serializes_catalog() {
        let (_dir, data) = fixture_data_dir();

        let text = api_specification(&data);
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        let endpoints = json["endpoints"].as_array().unwrap();
        assert_eq!(endpoints.len(), 3);
        assert_eq!(endpoints[0]["name"], "eq-master");
    }

    #[test]
    fn test_api_specification_omits_absent_fields() {
        let (_dir, data) = fixture_data_dir();

        let json: serde_json::Value =
            serde_json::from_str(&api_specification(&data)).unwrap();

        // eq-master declares no path_old; the serialization omits it rather
        // than writing null
        let eq_master = json["endpoints"][0].as_object().unwrap();
        assert!(!eq_master.contains_key("path_old"));
        // auth-user has no pagination
        let auth_user = json["endpoints"][2].as_object().unwrap();
        assert!(!auth_user.contains_key("pagination"));
    }

    #[test]
    fn test_api_specification_reports_load_failure_as_document() {
        let (_dir, data) = empty_data_dir();

        let json: serde_json::Value =
            serde_json::from_str(&api_specification(&data)).unwrap();
        assert!(json["error"].is_string());
    }

    #[test]
    fn test_common_patterns_inlines_sample_code() {
        let (_dir, data) = fixture_data_dir();

        let json: serde_json::Value = serde_json::from_str(&common_patterns(&data)).unwrap();

        let patterns = json["patterns"].as_array().unwrap();
        assert_eq!(patterns.len(), 3);

        let pagination = patterns[0].as_object().unwrap();
        assert_eq!(pagination["pattern_name"], "pagination");
        assert_eq!(pagination["sample_code"], "print('pagination sample')\n");
    }

    #[test]
    fn test_common_patterns_missing_sample_file_is_not_fatal() {
        let (_dir, data) = fixture_data_dir();

        let json: serde_json::Value = serde_json::from_str(&common_patterns(&data)).unwrap();

        let patterns = json["patterns"].as_array().unwrap();
        // the pattern with an unreadable sample file is still listed,
        // just without the inlined code
        let broken = patterns[1].as_object().unwrap();
        assert_eq!(broken["pattern_name"], "broken");
        assert!(!broken.contains_key("sample_code"));
    }

    #[test]
    fn test_common_patterns_omits_absent_sample_path() {
        let (_dir, data) = fixture_data_dir();

        let json: serde_json::Value = serde_json::from_str(&common_patterns(&data)).unwrap();

        let plain = json["patterns"][2].as_object().unwrap();
        assert!(!plain.contains_key("sample_code_path"));
        assert!(!plain.contains_key("sample_code"));
    }
}
