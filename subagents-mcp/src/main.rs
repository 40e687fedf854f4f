// ABOUTME: MCP server binary exposing spawn_subagent and cleanup_subagent.
// ABOUTME: Serves JSON-RPC on stdio; all diagnostics go to stderr.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use subagents::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Stdout is the protocol channel, so logs must stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let shell = ShellFunctions::from_env()?;
    tracing::info!(
        "using shell functions from {}",
        shell.functions_file().display()
    );

    let registry = Registry::new();
    registry.register(SpawnSubagentTool::new(shell.clone())).await;
    registry.register(CleanupSubagentTool::new(shell)).await;
    tracing::info!("tools: {}", registry.list().await.join(", "));

    let server = McpServer::new("subagents", env!("CARGO_PKG_VERSION"), registry);
    if let Err(e) = server.run_stdio().await {
        tracing::error!("MCP server failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
