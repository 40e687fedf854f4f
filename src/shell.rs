// ABOUTME: ShellFunctions - invokes functions defined in an external shell file.
// ABOUTME: Sources the file in a child shell and passes arguments as argv.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tracing::debug;

use crate::error::ShellError;

/// Trampoline executed by the child shell. `$0` is the functions file,
/// `$1` the function name, the rest its arguments. Arguments are never
/// interpolated into the script, so no shell quoting is needed.
const TRAMPOLINE: &str = r#"source "$0" || exit 127; f="$1"; shift; "$f" "$@""#;

const FUNCTIONS_FILE_ENV: &str = "SUBAGENTS_FUNCTIONS_FILE";
const SHELL_ENV: &str = "SUBAGENTS_SHELL";
const DEFAULT_FUNCTIONS_FILE: &str = ".codex/agents.zsh";

/// Invokes named functions from an external shell definitions file.
///
/// Defaults to a zsh login shell so the user's environment is available to
/// the sourced definitions, matching how the functions are written to run.
#[derive(Debug, Clone)]
pub struct ShellFunctions {
    shell: String,
    login: bool,
    functions_file: PathBuf,
}

impl ShellFunctions {
    /// Create an invoker for the given functions file.
    pub fn new(functions_file: impl Into<PathBuf>) -> Self {
        Self {
            shell: "zsh".to_string(),
            login: true,
            functions_file: functions_file.into(),
        }
    }

    /// Build from the environment, falling back to `~/.codex/agents.zsh`.
    ///
    /// `SUBAGENTS_FUNCTIONS_FILE` overrides the functions file and
    /// `SUBAGENTS_SHELL` the shell binary.
    pub fn from_env() -> Result<Self, ShellError> {
        let functions_file = match std::env::var(FUNCTIONS_FILE_ENV) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => {
                let home = dirs::home_dir().ok_or_else(|| {
                    ShellError::Configuration("could not determine home directory".to_string())
                })?;
                home.join(DEFAULT_FUNCTIONS_FILE)
            }
        };

        let mut invoker = Self::new(functions_file);
        if let Ok(shell) = std::env::var(SHELL_ENV) {
            if !shell.trim().is_empty() {
                invoker.shell = shell;
            }
        }
        Ok(invoker)
    }

    /// Override the shell binary (default: `zsh`).
    pub fn shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    /// Toggle login-shell invocation (default: on).
    pub fn login(mut self, login: bool) -> Self {
        self.login = login;
        self
    }

    /// The functions file this invoker sources.
    pub fn functions_file(&self) -> &Path {
        &self.functions_file
    }

    /// Invoke `function` with `args` and return its trimmed stdout.
    ///
    /// The child inherits the parent's working directory and environment.
    /// No timeout is applied; a hung function hangs the call.
    pub async fn invoke(&self, function: &str, args: &[String]) -> Result<String, ShellError> {
        let flags = if self.login { "-lc" } else { "-c" };

        let mut cmd = tokio::process::Command::new(&self.shell);
        cmd.arg(flags)
            .arg(TRAMPOLINE)
            .arg(&self.functions_file)
            .arg(function)
            .args(args)
            // stdin carries the MCP session; children must not read it.
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!("invoking shell function '{}' ({} args)", function, args.len());

        let output = cmd.output().await.map_err(|e| ShellError::Spawn {
            function: function.to_string(),
            source: e,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            return Err(ShellError::Exit {
                function: function.to_string(),
                code: output.status.code().unwrap_or(-1),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(stdout.trim().to_string())
    }
}
