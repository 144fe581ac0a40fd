//! MCP tool implementations.
//!
//! Each tool:
//! 1. Parses its input parameters
//! 2. Calls the YOK Akademik API client (at most one request)
//! 3. Formats the result as a plain-text block
//!
//! Backend and transport failures are rendered into the returned text;
//! a tool only fails (`Err`) on malformed input arguments.

mod collaborators;
mod info;
mod search;

pub use collaborators::CollaboratorsTool;
pub use info::YokInfoTool;
pub use search::SearchProfilesTool;

use std::sync::Arc;

use crate::client::YokAkademikClient;
use crate::error::ToolResult;

/// Tool execution context.
pub struct ToolContext {
    /// API client.
    pub client: Arc<YokAkademikClient>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(client: Arc<YokAkademikClient>) -> Self {
        Self { client }
    }
}

/// Trait for MCP tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "search_academic_profiles").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        Box::new(SearchProfilesTool),
        Box::new(CollaboratorsTool),
        Box::new(YokInfoTool),
    ]
}
