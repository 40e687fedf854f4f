// ABOUTME: CleanupSubagentTool - removes a finished subagent worktree and
// ABOUTME: branch by invoking the external agent_cleanup shell function.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ToolError;
use crate::shell::ShellFunctions;
use crate::tool::{Tool, ToolResult};

const CLEANUP_FUNCTION: &str = "agent_cleanup";

/// Tool that tears down a subagent's worktree and branch.
pub struct CleanupSubagentTool {
    shell: ShellFunctions,
}

impl CleanupSubagentTool {
    /// Create the tool with the given shell-function invoker.
    pub fn new(shell: ShellFunctions) -> Self {
        Self { shell }
    }
}

#[async_trait]
impl Tool for CleanupSubagentTool {
    fn name(&self) -> &str {
        "cleanup_subagent"
    }

    fn description(&self) -> &str {
        "Remove a finished subagent worktree and branch."
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "branch": {
                    "type": "string",
                    "description": "The branch identifier of the subagent to clean up"
                }
            },
            "required": ["branch"]
        })
    }

    async fn execute(&self, params: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize)]
        struct Params {
            branch: String,
        }
        let params: Params = serde_json::from_value(params)?;

        let branch = params.branch.trim();
        if branch.is_empty() {
            return Err(ToolError::InvalidParams("branch must not be empty".to_string()).into());
        }

        let output = self
            .shell
            .invoke(CLEANUP_FUNCTION, &[branch.to_string()])
            .await?;

        // Some cleanup functions print nothing on success.
        let text = if output.is_empty() {
            format!("cleanup requested for {}", branch)
        } else {
            output
        };

        Ok(ToolResult::text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn functions_file(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn tool(file: &tempfile::NamedTempFile) -> CleanupSubagentTool {
        let shell = ShellFunctions::new(file.path()).shell("bash").login(false);
        CleanupSubagentTool::new(shell)
    }

    #[tokio::test]
    async fn test_cleanup_returns_function_output() {
        let file = functions_file("agent_cleanup() { echo \"removed $1\"; }\n");

        let result = tool(&file)
            .execute(serde_json::json!({"branch": "agent/fix-retries"}))
            .await
            .unwrap();

        assert!(!result.is_error);
        assert_eq!(result.content, "removed agent/fix-retries");
    }

    #[tokio::test]
    async fn test_silent_cleanup_gets_fallback_message() {
        let file = functions_file("agent_cleanup() { :; }\n");

        let result = tool(&file)
            .execute(serde_json::json!({"branch": "agent/quiet"}))
            .await
            .unwrap();

        assert_eq!(result.content, "cleanup requested for agent/quiet");
    }

    #[tokio::test]
    async fn test_cleanup_trims_branch() {
        let file = functions_file("agent_cleanup() { echo \"[$1]\"; }\n");

        let result = tool(&file)
            .execute(serde_json::json!({"branch": "  agent/padded  "}))
            .await
            .unwrap();

        assert_eq!(result.content, "[agent/padded]");
    }

    #[tokio::test]
    async fn test_empty_branch_rejected_before_spawn() {
        let marker = std::env::temp_dir().join("subagents-cleanup-marker-empty-test");
        let _ = std::fs::remove_file(&marker);
        let file = functions_file(&format!(
            "agent_cleanup() {{ date > '{}'; }}\n",
            marker.display()
        ));

        let err = tool(&file)
            .execute(serde_json::json!({"branch": ""}))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("must not be empty"));
        assert!(!marker.exists(), "validation must run before any child process");
    }

    #[tokio::test]
    async fn test_failing_function_names_it() {
        let file = functions_file("agent_cleanup() { echo 'branch is locked' >&2; return 2; }\n");

        let err = tool(&file)
            .execute(serde_json::json!({"branch": "agent/locked"}))
            .await
            .unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("agent_cleanup"));
        assert!(message.contains("branch is locked"));
    }
}
