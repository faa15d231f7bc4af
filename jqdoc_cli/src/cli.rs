use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Defines the top-level interface for the jqdoc CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "jqdoc")]
#[command(version, about = "J-Quants API documentation server and data tools.")]
pub struct JqDocCli {
    /// Path to the directory holding the catalog documents (with a
    /// templates/ directory inside). Defaults to the shipped data set.
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: JqDocCliCommand,
}

/// Defines the available subcommands of the jqdoc CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum JqDocCliCommand {
    /// Start the documentation MCP server on stdio.
    Serve,
    /// Validate all catalog documents and report every violation.
    Check,
}
