//! MCP server command implementation.

use jqdoc_core::loader::DataDir;
use jqdoc_mcp::JqDocMcpServer;

use crate::errors::CliError;
use crate::ui;

/// Start the MCP server on stdio.
pub fn serve(data_dir: DataDir) -> Result<(), CliError> {
    // Create a tokio runtime for the async MCP server
    let rt = tokio::runtime::Runtime::new().map_err(|e| {
        ui::error_with_details("Failed to create async runtime", &e.to_string());
        CliError::ServerError
    })?;

    rt.block_on(async {
        let server = JqDocMcpServer::new(data_dir);

        // Serve over stdio (blocks until connection closes)
        server.serve_stdio().await.map_err(|e| {
            ui::error_with_details("MCP server error", &e.to_string());
            CliError::ServerError
        })
    })
}
