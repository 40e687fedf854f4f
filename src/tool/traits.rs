// ABOUTME: Defines the Tool trait - a named, schema-described operation
// ABOUTME: exposed to MCP clients with an async execute method.

use async_trait::async_trait;

use super::ToolResult;

/// A tool that can be called by an MCP client.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the unique name of this tool.
    fn name(&self) -> &str;

    /// Returns a human-readable description for the caller.
    fn description(&self) -> &str;

    /// Returns the JSON Schema for the tool's input parameters.
    fn schema(&self) -> serde_json::Value;

    /// Execute the tool with the given parameters.
    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error>;
}
