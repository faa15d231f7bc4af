//! Loading of the on-disk catalog documents.
//!
//! Endpoint and pattern documents are structurally validated before the typed
//! model is built; a load either yields the full collection or fails with
//! every violation listed. Reference data and FAQ documents are loose JSON
//! and only get existence and parse checks.
//!
//! There is no retained state: every call re-reads its document. The files
//! are small and immutable for the process lifetime, so per-request loads are
//! safe from any number of threads.

use std::io;
use std::path::{Path, PathBuf};
use std::{env, fmt, fs};

use log::{debug, info};
use serde_json::Value;

use crate::model::validation::{
    SchemaViolation, validate_endpoint_document, validate_pattern_document,
};
use crate::model::{EndpointCollection, PatternCollection};

/// Environment variable overriding the data directory location.
pub const DATA_DIR_ENV: &str = "JQDOC_DATA_DIR";
/// Environment variable overriding the templates directory location.
pub const TEMPLATES_DIR_ENV: &str = "JQDOC_TEMPLATES_DIR";

const ENDPOINTS_FILE: &str = "endpoints.json";
const PATTERNS_FILE: &str = "patterns.json";
const REFERENCE_DATA_FILE: &str = "reference_data.json";
const FAQ_FILE: &str = "faq.json";

/// Location of the data and templates directories.
///
/// The default points at the documents shipped with this crate; both halves
/// can be overridden through the environment or an explicit path.
#[derive(Debug, Clone)]
pub struct DataDir {
    data: PathBuf,
    templates: PathBuf,
}

impl Default for DataDir {
    fn default() -> Self {
        let data = env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data")));
        let templates = env::var_os(TEMPLATES_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/templates")));
        Self { data, templates }
    }
}

impl DataDir {
    pub fn new(data: impl Into<PathBuf>, templates: impl Into<PathBuf>) -> Self {
        Self {
            data: data.into(),
            templates: templates.into(),
        }
    }

    /// A data directory whose `templates` directory sits beside it.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            templates: root.join("templates"),
            data: root,
        }
    }

    pub fn data(&self) -> &Path {
        &self.data
    }

    pub fn templates(&self) -> &Path {
        &self.templates
    }

    pub fn endpoints_path(&self) -> PathBuf {
        self.data.join(ENDPOINTS_FILE)
    }

    pub fn patterns_path(&self) -> PathBuf {
        self.data.join(PATTERNS_FILE)
    }

    pub fn reference_data_path(&self) -> PathBuf {
        self.data.join(REFERENCE_DATA_FILE)
    }

    pub fn faq_path(&self) -> PathBuf {
        self.data.join(FAQ_FILE)
    }

    pub fn load_endpoints(&self) -> Result<EndpointCollection, DataLoadError> {
        load_endpoints(Some(&self.endpoints_path()))
    }

    pub fn load_patterns(&self) -> Result<PatternCollection, DataLoadError> {
        load_patterns(Some(&self.patterns_path()))
    }

    pub fn load_reference_data(&self) -> Result<Value, DataLoadError> {
        load_reference_data(Some(&self.reference_data_path()))
    }

    pub fn load_faqs(&self) -> Result<Value, DataLoadError> {
        load_faqs(Some(&self.faq_path()))
    }

    pub fn load_sample_code(&self, relative_path: &str) -> Result<String, DataLoadError> {
        load_sample_code(relative_path, Some(&self.templates))
    }
}

/// Error type for document loading.
#[derive(Debug)]
pub enum DataLoadError {
    /// The document file does not exist.
    NotFound(PathBuf),
    /// The file exists but could not be read.
    Io(PathBuf, io::Error),
    /// The file is not valid JSON.
    Parse(PathBuf, serde_json::Error),
    /// The JSON does not conform to the document schema.
    Validation(PathBuf, Vec<SchemaViolation>),
}

impl DataLoadError {
    /// Short machine-readable name of the failure kind, used in error payloads.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DataLoadError::NotFound(_) => "NotFound",
            DataLoadError::Io(_, _) => "Io",
            DataLoadError::Parse(_, _) => "Parse",
            DataLoadError::Validation(_, _) => "Validation",
        }
    }
}

impl fmt::Display for DataLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataLoadError::NotFound(path) => {
                write!(f, "Data file not found: {}", path.display())
            }
            DataLoadError::Io(path, error) => {
                write!(f, "Failed to read {}: {}", path.display(), error)
            }
            DataLoadError::Parse(path, error) => {
                write!(f, "Invalid JSON in {}: {}", path.display(), error)
            }
            DataLoadError::Validation(path, violations) => {
                writeln!(f, "Data validation failed for {}:", path.display())?;
                for violation in violations {
                    writeln!(f, "  - {}", violation)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for DataLoadError {}

/// Load and validate the endpoint catalog.
///
/// Defaults to the shipped `endpoints.json` when no path is given. The load
/// is atomic: either the whole collection is returned or the error lists
/// every schema violation.
pub fn load_endpoints(path: Option<&Path>) -> Result<EndpointCollection, DataLoadError> {
    let default = DataDir::default().endpoints_path();
    let path = path.unwrap_or(&default);
    let raw = read_json(path)?;

    validate_endpoint_document(&raw)
        .map_err(|violations| DataLoadError::Validation(path.to_path_buf(), violations))?;

    let collection: EndpointCollection =
        serde_json::from_value(raw).map_err(|e| DataLoadError::Parse(path.to_path_buf(), e))?;
    info!(
        "Loaded {} endpoints from {}",
        collection.endpoints.len(),
        path.display()
    );
    Ok(collection)
}

/// Load and validate the usage-pattern catalog.
pub fn load_patterns(path: Option<&Path>) -> Result<PatternCollection, DataLoadError> {
    let default = DataDir::default().patterns_path();
    let path = path.unwrap_or(&default);
    let raw = read_json(path)?;

    validate_pattern_document(&raw)
        .map_err(|violations| DataLoadError::Validation(path.to_path_buf(), violations))?;

    let collection: PatternCollection =
        serde_json::from_value(raw).map_err(|e| DataLoadError::Parse(path.to_path_buf(), e))?;
    info!(
        "Loaded {} patterns from {}",
        collection.patterns.len(),
        path.display()
    );
    Ok(collection)
}

/// Load the reference-data document as loose JSON (no schema enforcement).
pub fn load_reference_data(path: Option<&Path>) -> Result<Value, DataLoadError> {
    let default = DataDir::default().reference_data_path();
    let path = path.unwrap_or(&default);
    let raw = read_json(path)?;
    debug!("Loaded reference data from {}", path.display());
    Ok(raw)
}

/// Load the FAQ document as loose JSON (no schema enforcement).
pub fn load_faqs(path: Option<&Path>) -> Result<Value, DataLoadError> {
    let default = DataDir::default().faq_path();
    let path = path.unwrap_or(&default);
    let raw = read_json(path)?;
    debug!("Loaded FAQ data from {}", path.display());
    Ok(raw)
}

/// Read a sample-code file, relative to the templates directory.
pub fn load_sample_code(
    relative_path: &str,
    templates_dir: Option<&Path>,
) -> Result<String, DataLoadError> {
    let default = DataDir::default();
    let templates_dir = templates_dir.unwrap_or_else(|| default.templates());
    let path = templates_dir.join(relative_path);

    if !path.exists() {
        return Err(DataLoadError::NotFound(path));
    }
    fs::read_to_string(&path).map_err(|e| DataLoadError::Io(path, e))
}

fn read_json(path: &Path) -> Result<Value, DataLoadError> {
    if !path.exists() {
        return Err(DataLoadError::NotFound(path.to_path_buf()));
    }
    let text =
        fs::read_to_string(path).map_err(|e| DataLoadError::Io(path.to_path_buf(), e))?;
    serde_json::from_str(&text).map_err(|e| DataLoadError::Parse(path.to_path_buf(), e))
}
