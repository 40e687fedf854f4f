// ABOUTME: MCP module - Model Context Protocol server implementation.
// ABOUTME: Speaks JSON-RPC 2.0 over stdio and dispatches tool calls.

mod server;
mod types;

pub use server::McpServer;
pub use types::*;

#[cfg(test)]
mod types_test;
