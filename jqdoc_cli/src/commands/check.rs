//! Check command: validates the catalog documents and reports diagnostics.

use jqdoc_core::loader::DataDir;

use crate::errors::CliError;
use crate::ui;

/// Check every catalog document. Prints one line per document plus every
/// violation found, and fails when any document is broken.
pub fn check_data(data_dir: &DataDir) -> Result<(), CliError> {
    ui::header("Checking catalog documents");
    let mut problems = 0usize;

    match data_dir.load_endpoints() {
        Ok(collection) => {
            ui::success(&format!("endpoints.json: {} endpoints", collection.endpoints.len()));
        }
        Err(e) => {
            ui::error(&e.to_string());
            problems += 1;
        }
    }

    match data_dir.load_patterns() {
        Ok(collection) => {
            ui::success(&format!("patterns.json: {} patterns", collection.patterns.len()));

            // a declared sample file that cannot be read is a data problem,
            // even though the resource layer degrades gracefully
            for pattern in &collection.patterns {
                if let Some(sample_code_path) = &pattern.sample_code_path {
                    if let Err(e) = data_dir.load_sample_code(sample_code_path) {
                        ui::error(&format!(
                            "patterns.json: sample code for '{}' is unreadable: {}",
                            pattern.pattern_name, e
                        ));
                        problems += 1;
                    }
                }
            }
        }
        Err(e) => {
            ui::error(&e.to_string());
            problems += 1;
        }
    }

    match data_dir.load_reference_data() {
        Ok(_) => ui::success("reference_data.json: parsed"),
        Err(e) => {
            ui::error(&e.to_string());
            problems += 1;
        }
    }

    match data_dir.load_faqs() {
        Ok(_) => ui::success("faq.json: parsed"),
        Err(e) => {
            ui::error(&e.to_string());
            problems += 1;
        }
    }

    if problems == 0 {
        ui::success("All documents are valid");
        Ok(())
    } else {
        ui::error(&format!("\nFound {} problem(s)", problems));
        Err(CliError::DataError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    fn valid_fixture(dir: &TempDir) {
        write(
            dir,
            "endpoints.json",
            r#"{"endpoints": [{
                "name": "eq-master",
                "name_ja": "株式マスタ",
                "name_en": "Equity Master",
                "path": "/equities/master",
                "method": "GET",
                "description": "上場銘柄の一覧を取得します。",
                "response": {"description": "銘柄一覧"},
                "plan": ["standard"],
                "data_update": {"frequency": "日次", "time": "07:00"}
            }]}"#,
        );
        write(dir, "patterns.json", r#"{"patterns": []}"#);
        write(dir, "reference_data.json", r#"{"reference_data": []}"#);
        write(dir, "faq.json", r#"{"faqs": []}"#);
    }

    #[test]
    fn test_check_valid_data() {
        let dir = TempDir::new().unwrap();
        valid_fixture(&dir);
        let data_dir = DataDir::new(dir.path(), dir.path().join("templates"));

        assert_eq!(check_data(&data_dir), Ok(()));
    }

    #[test]
    fn test_check_fails_on_invalid_document() {
        let dir = TempDir::new().unwrap();
        valid_fixture(&dir);
        write(&dir, "endpoints.json", r#"{"endpoints": [{"name": "broken"}]}"#);
        let data_dir = DataDir::new(dir.path(), dir.path().join("templates"));

        assert_eq!(check_data(&data_dir), Err(CliError::DataError));
    }

    #[test]
    fn test_check_fails_on_missing_sample_code() {
        let dir = TempDir::new().unwrap();
        valid_fixture(&dir);
        write(
            &dir,
            "patterns.json",
            r#"{"patterns": [{
                "pattern_name": "pagination",
                "description": "全件取得のループ",
                "sample_code_path": "patterns/missing.py"
            }]}"#,
        );
        let data_dir = DataDir::new(dir.path(), dir.path().join("templates"));

        assert_eq!(check_data(&data_dir), Err(CliError::DataError));
    }
}
