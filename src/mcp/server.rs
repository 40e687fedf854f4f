// ABOUTME: MCP server loop - reads JSON-RPC requests line by line and
// ABOUTME: dispatches them to registered tools, replying over a writer task.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, McpInitializeResult,
    McpRequest, McpResponse, McpServerCapabilities, McpServerInfo, McpToolCallParams,
    McpToolResult, PARSE_ERROR, PROTOCOL_VERSION, RequestId,
};
use crate::error::{McpError, ToolError};
use crate::tool::Registry;

/// An MCP server that exposes the tools in a [`Registry`] over JSON-RPC.
pub struct McpServer {
    name: String,
    version: String,
    registry: Registry,
}

impl McpServer {
    /// Create a new server with the given identity and tool registry.
    pub fn new(name: impl Into<String>, version: impl Into<String>, registry: Registry) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            registry,
        }
    }

    /// Serve MCP over the process's stdin/stdout until the host closes stdin.
    pub async fn run_stdio(&self) -> Result<(), McpError> {
        info!("serving MCP on stdio as '{}' v{}", self.name, self.version);
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve MCP over arbitrary streams. Returns once the reader reaches EOF
    /// and every in-flight tool call has been answered.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<(), McpError>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, mut rx) = mpsc::channel::<String>(64);

        // Single writer task so concurrent tool calls never interleave output.
        let writer_handle = tokio::spawn(async move {
            let mut writer = writer;
            while let Some(line) = rx.recv().await {
                writer.write_all(line.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
            Ok::<_, McpError>(())
        });

        let mut lines = BufReader::new(reader).lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            self.handle_line(&line, &tx).await?;
        }

        // EOF: tool tasks still hold channel clones, so the writer drains
        // their replies before shutting down.
        drop(tx);
        match writer_handle.await {
            Ok(result) => result,
            Err(_) => Err(McpError::Connection("writer task failed".into())),
        }
    }

    async fn handle_line(&self, line: &str, tx: &mpsc::Sender<String>) -> Result<(), McpError> {
        let request: McpRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                warn!("failed to parse incoming message: {}", e);
                let response =
                    McpResponse::error(None, PARSE_ERROR, format!("Parse error: {}", e));
                return self.send(tx, &response).await;
            }
        };

        if request.jsonrpc != "2.0" {
            let response = McpResponse::error(
                request.id,
                INVALID_REQUEST,
                format!("Unsupported JSON-RPC version: {}", request.jsonrpc),
            );
            return self.send(tx, &response).await;
        }

        let McpRequest {
            id, method, params, ..
        } = request;

        let Some(id) = id else {
            debug!("notification: {}", method);
            return Ok(());
        };

        match method.as_str() {
            "initialize" => {
                let result = serde_json::to_value(self.initialize_result())?;
                self.send(tx, &McpResponse::success(id, result)).await
            }
            "ping" => {
                self.send(tx, &McpResponse::success(id, serde_json::json!({})))
                    .await
            }
            "tools/list" => {
                let tools = self.registry.tool_infos().await;
                let result = serde_json::json!({ "tools": tools });
                self.send(tx, &McpResponse::success(id, result)).await
            }
            "tools/call" => self.handle_tool_call(id, params, tx).await,
            other => {
                let response = McpResponse::error(
                    Some(id),
                    METHOD_NOT_FOUND,
                    format!("Method not found: {}", other),
                );
                self.send(tx, &response).await
            }
        }
    }

    /// Dispatch a tools/call request. Execution runs on its own task so the
    /// host may keep several calls in flight; replies carry the request id.
    async fn handle_tool_call(
        &self,
        id: RequestId,
        params: Option<serde_json::Value>,
        tx: &mpsc::Sender<String>,
    ) -> Result<(), McpError> {
        let params: McpToolCallParams = match serde_json::from_value(params.unwrap_or_default()) {
            Ok(params) => params,
            Err(e) => {
                let response = McpResponse::error(
                    Some(id),
                    INVALID_PARAMS,
                    format!("Invalid params: {}", e),
                );
                return self.send(tx, &response).await;
            }
        };

        let Some(tool) = self.registry.get(&params.name).await else {
            let error = ToolError::NotFound(params.name);
            let response = McpResponse::error(Some(id), INVALID_PARAMS, error.to_string());
            return self.send(tx, &response).await;
        };

        let arguments = params.arguments.unwrap_or_else(|| serde_json::json!({}));
        let tx = tx.clone();
        tokio::spawn(async move {
            debug!("calling tool '{}'", tool.name());
            let result = match tool.execute(arguments).await {
                Ok(result) => result.into_mcp(),
                Err(e) => McpToolResult::error(format!("{:#}", e)),
            };

            let response = match serde_json::to_value(&result) {
                Ok(value) => McpResponse::success(id, value),
                Err(e) => McpResponse::error(
                    Some(id),
                    INTERNAL_ERROR,
                    format!("Failed to serialize tool result: {}", e),
                ),
            };

            match serde_json::to_string(&response) {
                Ok(json) => {
                    if tx.send(json).await.is_err() {
                        warn!("output stream closed before tool result could be sent");
                    }
                }
                Err(e) => warn!("failed to serialize response: {}", e),
            }
        });

        Ok(())
    }

    async fn send(&self, tx: &mpsc::Sender<String>, response: &McpResponse) -> Result<(), McpError> {
        let json = serde_json::to_string(response)?;
        tx.send(json)
            .await
            .map_err(|_| McpError::Connection("output stream closed".into()))
    }

    fn initialize_result(&self) -> McpInitializeResult {
        McpInitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: McpServerCapabilities {
                tools: Some(serde_json::json!({})),
                ..Default::default()
            },
            server_info: McpServerInfo {
                name: self.name.clone(),
                version: self.version.clone(),
            },
        }
    }
}
