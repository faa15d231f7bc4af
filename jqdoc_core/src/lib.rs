//! Core data model and documentation engines for the J-Quants doc server.
//!
//! This crate holds the validated endpoint/pattern catalog model, the loaders
//! for the on-disk JSON documents, and the five lookup engines (search,
//! describe, property lookup, Q&A, sample-code generation). Everything here
//! is pure and synchronous; transports live in `jqdoc_mcp`.

pub mod codegen;
pub mod describe;
pub mod errors;
pub mod loader;
pub mod lookup;
pub mod model;
pub mod qa;
pub mod search;
