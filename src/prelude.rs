// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use subagents::prelude::*;` to get started quickly.

pub use crate::error::{McpError, ShellError, SubagentsError, ToolError};
pub use crate::mcp::{
    McpContentBlock, McpInitializeResult, McpRequest, McpResponse, McpRpcError, McpServer,
    McpServerCapabilities, McpServerInfo, McpToolCallParams, McpToolInfo, McpToolResult, RequestId,
};
pub use crate::shell::ShellFunctions;
pub use crate::tool::{Registry, Tool, ToolResult};
pub use crate::tools::{CleanupSubagentTool, SpawnSubagentTool};
