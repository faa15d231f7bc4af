//! Keyword search over the endpoint catalog.

use log::debug;
use serde::Serialize;

use crate::model::EndpointCollection;

/// One search hit. A summary row, never the full endpoint detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub name: String,
    pub name_ja: String,
    pub name_en: String,
    pub path: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub results: Vec<SearchResult>,
}

/// Case-insensitive substring search across an endpoint's name, both
/// localized names, path, legacy path and description. An endpoint qualifies
/// when any field contains the keyword. The optional category must equal the
/// first segment of the endpoint path (the text between the first two `/`);
/// endpoints without a leading segment never match a category filter.
///
/// Results keep collection order; there is no ranking and no result cap.
pub fn search_endpoints(
    collection: &EndpointCollection,
    keyword: &str,
    category: Option<&str>,
) -> SearchResults {
    debug!(
        "search_endpoints: keyword='{}', category={:?}",
        keyword, category
    );

    let keyword = keyword.to_lowercase();
    let mut results = Vec::new();

    for endpoint in &collection.endpoints {
        let legacy_path = endpoint.path_old.as_deref().unwrap_or("");
        let matches = endpoint.name.to_lowercase().contains(&keyword)
            || endpoint.name_ja.to_lowercase().contains(&keyword)
            || endpoint.name_en.to_lowercase().contains(&keyword)
            || endpoint.path.to_lowercase().contains(&keyword)
            || legacy_path.to_lowercase().contains(&keyword)
            || endpoint.description.to_lowercase().contains(&keyword);
        if !matches {
            continue;
        }

        if let Some(category) = category {
            if !path_category(&endpoint.path).eq_ignore_ascii_case(category) {
                continue;
            }
        }

        results.push(SearchResult {
            name: endpoint.name.clone(),
            name_ja: endpoint.name_ja.clone(),
            name_en: endpoint.name_en.clone(),
            path: endpoint.path.clone(),
            description: endpoint.description.clone(),
        });
    }

    SearchResults {
        count: results.len(),
        results,
    }
}

/// The text between the first two `/` of a path, or "" when the path has no
/// second segment.
fn path_category(path: &str) -> &str {
    let mut segments = path.split('/');
    segments.next();
    segments.next().unwrap_or("")
}
