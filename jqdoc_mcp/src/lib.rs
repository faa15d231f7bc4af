//! MCP server for J-Quants API documentation.
//!
//! This crate exposes the documentation engines of `jqdoc_core` as MCP tools
//! (search, describe, code generation, Q&A, property lookup) and the two
//! catalog documents as MCP resources.

pub mod resources;
pub mod tools;

mod server;

pub use server::JqDocMcpServer;
