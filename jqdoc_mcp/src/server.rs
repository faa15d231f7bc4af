//! Core MCP server implementation for the J-Quants documentation service.

use std::fmt;

use log::debug;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, ServiceExt,
    handler::server::wrapper::Parameters, model::*, service::RequestContext, tool, tool_handler,
    tool_router, transport::stdio,
};

use jqdoc_core::loader::DataDir;

use crate::resources;
use crate::tools::{
    self, AnswerQuestionParams, DescribeEndpointParams, GenerateSampleCodeParams,
    HealthCheckParams, LookupPropertyParams, SearchEndpointsParams,
};

/// Error type for MCP server operations.
#[derive(Debug)]
pub enum ServerError {
    /// MCP protocol or transport error
    Mcp(String),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Mcp(msg) => write!(f, "MCP error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

/// MCP server over a documentation data directory.
///
/// The server holds no document state: every tool call re-reads the
/// documents it needs. The files are small, immutable for the process
/// lifetime, and safe to read from any number of concurrent requests.
#[derive(Clone)]
pub struct JqDocMcpServer {
    data_dir: DataDir,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<JqDocMcpServer>,
}

#[tool_router]
impl JqDocMcpServer {
    /// Create a new MCP server reading from the given data directory.
    pub fn new(data_dir: DataDir) -> Self {
        debug!("Creating MCP server for data dir: {:?}", data_dir.data());
        Self {
            data_dir,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Check that the documentation server is running.")]
    async fn health_check(
        &self,
        Parameters(params): Parameters<HealthCheckParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: health_check");
        Ok(tools::health::execute(&params))
    }

    #[tool(
        description = "Search J-Quants API endpoints by keyword, optionally filtered by category. \
        The keyword is matched case-insensitively against endpoint names, localized names, paths \
        and descriptions; the category filters on the first path segment (e.g. 'equities', 'fins', \
        'auth'). Returns summary rows; use describe_endpoint for full details."
    )]
    async fn search_endpoints(
        &self,
        Parameters(params): Parameters<SearchEndpointsParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tools::search::execute(&self.data_dir, &params))
    }

    #[tool(
        description = "Get the full specification of one endpoint by internal name (e.g. \
        'eq-master'): required/optional parameters, response fields, auth and plan requirements, \
        data update schedule and pagination support. Use search_endpoints to discover names."
    )]
    async fn describe_endpoint(
        &self,
        Parameters(params): Parameters<DescribeEndpointParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tools::describe::execute(&self.data_dir, &params))
    }

    #[tool(
        description = "Generate a runnable sample program for an endpoint. Currently only \
        language='python' is supported. Generated code reads credentials from JQUANTS_* \
        environment variables and handles pagination structurally when the endpoint supports it."
    )]
    async fn generate_sample_code(
        &self,
        Parameters(params): Parameters<GenerateSampleCodeParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tools::codegen::execute(&self.data_dir, &params))
    }

    #[tool(
        description = "Answer a usage question (authentication, rate limits, pagination, data \
        update timing, plans, error handling) from the FAQ knowledge base. Returns up to three \
        ranked answers, or the list of available categories when nothing matches."
    )]
    async fn answer_question(
        &self,
        Parameters(params): Parameters<AnswerQuestionParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tools::qa::execute(&self.data_dir, &params))
    }

    #[tool(
        description = "Look up the reference data (enumerated valid values) behind a \
        request/response property name such as 'Mkt', 'S17' or 'HolidayDivision', optionally \
        scoped to one endpoint. Also reports whether the property exists at all."
    )]
    async fn lookup_property(
        &self,
        Parameters(params): Parameters<LookupPropertyParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(tools::lookup::execute(&self.data_dir, &params))
    }

    /// Serve MCP over stdio (stdin/stdout).
    ///
    /// This method blocks until the connection is closed.
    pub async fn serve_stdio(self) -> Result<(), ServerError> {
        debug!("Starting MCP server on stdio");
        let service = self
            .serve(stdio())
            .await
            .map_err(|e| ServerError::Mcp(format!("Failed to start server: {}", e)))?;
        service
            .waiting()
            .await
            .map_err(|e| ServerError::Mcp(format!("Server error: {}", e)))?;
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for JqDocMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder()
                .enable_resources()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "J-Quants API documentation server. Use the tools to search endpoints, inspect \
                 their specifications, generate sample code, answer usage questions and look up \
                 reference data. The resources expose the full endpoint and pattern catalogs."
                    .into(),
            ),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        debug!("Listing resources");
        Ok(ListResourcesResult {
            resources: resources::list_resources(),
            next_cursor: None,
            meta: None,
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let uri = &request.uri;
        debug!("Reading resource: {}", uri);

        let contents = match uri.as_str() {
            resources::API_SPECIFICATION_URI => resources::api_specification(&self.data_dir),
            resources::COMMON_PATTERNS_URI => resources::common_patterns(&self.data_dir),
            _ => {
                return Err(McpError::resource_not_found(
                    format!("Unknown resource URI: {}", uri),
                    None,
                ));
            }
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(contents, uri.clone())],
        })
    }
}
