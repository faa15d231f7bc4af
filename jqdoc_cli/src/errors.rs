/// Errors the CLI can exit with. Details are printed through `ui` before
/// these are returned, so the variants only carry the outcome kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CliError {
    /// A catalog document failed to load or validate.
    DataError,
    /// The MCP server could not be started or terminated abnormally.
    ServerError,
}
