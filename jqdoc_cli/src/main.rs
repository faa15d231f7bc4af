//! Entry point for the jqdoc CLI.

mod cli;
mod commands;
mod errors;
mod ui;

use clap::Parser;
use jqdoc_core::loader::DataDir;

use crate::cli::{JqDocCli, JqDocCliCommand};

fn main() {
    let args = JqDocCli::parse();

    // env_logger writes to stderr, which keeps stdout free for the MCP
    // protocol when serving
    let mut builder = env_logger::Builder::from_default_env();
    if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let data_dir = args
        .data_dir
        .clone()
        .map(DataDir::rooted)
        .unwrap_or_default();

    let result = match args.command {
        JqDocCliCommand::Serve => commands::serve(data_dir),
        JqDocCliCommand::Check => commands::check_data(&data_dir),
    };

    if result.is_err() {
        std::process::exit(1);
    }
}
