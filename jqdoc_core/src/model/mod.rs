//! Typed entities for the endpoint and usage-pattern catalogs.
//!
//! Reference data and FAQ documents are deliberately left untyped
//! (`serde_json::Value`); their value rows are heterogeneous per table.

mod endpoint;
mod pattern;
pub mod validation;

pub use endpoint::{
    DataUpdate, Endpoint, EndpointCollection, HttpMethod, Pagination, ParamLocation, ParamType,
    Parameter, ResponseField, ResponseSummary, ValidRequestPattern,
};
pub use pattern::{PatternCollection, UsagePattern};
