// ABOUTME: SpawnSubagentTool - creates a subagent branch/worktree by
// ABOUTME: invoking the external agent_spawn shell function.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ToolError;
use crate::shell::ShellFunctions;
use crate::tool::{Tool, ToolResult};

const SPAWN_FUNCTION: &str = "agent_spawn";

/// Tool that spawns a new subagent. The external function prints the
/// branch name it created; the tool returns it as a JSON payload.
pub struct SpawnSubagentTool {
    shell: ShellFunctions,
}

impl SpawnSubagentTool {
    /// Create the tool with the given shell-function invoker.
    pub fn new(shell: ShellFunctions) -> Self {
        Self { shell }
    }
}

#[async_trait]
impl Tool for SpawnSubagentTool {
    fn name(&self) -> &str {
        "spawn_subagent"
    }

    fn description(&self) -> &str {
        "Create a new subtask branch/worktree and start an agent there."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "description": {
                    "type": "string",
                    "description": "Free-text description of the task for the new subagent"
                }
            },
            "required": ["description"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            description: String,
        }
        let params: Params = serde_json::from_value(params)?;

        let description = params.description.trim();
        if description.is_empty() {
            return Err(
                ToolError::InvalidParams("description must not be empty".to_string()).into(),
            );
        }

        let branch = self
            .shell
            .invoke(SPAWN_FUNCTION, &[description.to_string()])
            .await?;
        let payload = serde_json::json!({ "branch": branch });

        Ok(ToolResult::text(serde_json::to_string_pretty(&payload)?))
    }
}
