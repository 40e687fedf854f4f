// ABOUTME: Defines all error types for the subagents library using thiserror.
// ABOUTME: Each submodule has its own error enum, unified under SubagentsError.

/// Top-level error type for the subagents library.
#[derive(Debug, thiserror::Error)]
pub enum SubagentsError {
    #[error("Shell error: {0}")]
    Shell(#[from] ShellError),

    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    #[error("MCP error: {0}")]
    Mcp(#[from] McpError),
}

/// Errors from invoking external shell functions.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("shell function '{function}' could not be spawned: {source}")]
    Spawn {
        function: String,
        #[source]
        source: std::io::Error,
    },

    #[error("shell function '{function}' failed (exit {code}): {stderr}")]
    Exit {
        function: String,
        code: i32,
        stderr: String,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Errors from tool operations.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}

/// Errors from the MCP server transport.
#[derive(Debug, thiserror::Error)]
pub enum McpError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
