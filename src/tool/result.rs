// ABOUTME: Defines the ToolResult type - the outcome of a tool execution,
// ABOUTME: convertible into MCP content blocks for the wire.

use crate::mcp::{McpContentBlock, McpToolResult};

/// Result of a tool execution.
#[derive(Debug, Clone)]
pub struct ToolResult {
    /// The output content.
    pub content: String,

    /// Whether this result represents an error.
    pub is_error: bool,
}

impl ToolResult {
    /// Create a successful text result.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    /// Create an error result.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: message.into(),
            is_error: true,
        }
    }

    /// Convert into the MCP wire representation.
    pub fn into_mcp(self) -> McpToolResult {
        McpToolResult {
            content: vec![McpContentBlock::Text {
                text: self.content,
            }],
            is_error: self.is_error,
        }
    }
}

impl Default for ToolResult {
    fn default() -> Self {
        Self::text("")
    }
}
