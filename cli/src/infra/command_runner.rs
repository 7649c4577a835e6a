//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation. Commands run to
//! completion; there is no timeout.

use std::process::{Output, Stdio};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::ports::CommandRunner;

/// Production `CommandRunner`. Spawns the program with tokio and waits for it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        debug!(program, ?args, "running");
        let output = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("failed to spawn {program}"))?;
        debug!(program, status = %output.status, "finished");
        Ok(output)
    }
}

/// Fail with the command line, exit status and stderr unless `output` succeeded.
///
/// # Errors
///
/// Returns an error when the process exited non-zero or was killed by a signal.
pub fn ensure_success(output: &Output, program: &str, args: &[&str]) -> Result<()> {
    if output.status.success() {
        return Ok(());
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    let status = output
        .status
        .code()
        .map_or_else(|| "a signal".to_string(), |c| format!("exit code {c}"));
    if stderr.is_empty() {
        anyhow::bail!("`{program} {}` failed with {status}", args.join(" "))
    }
    anyhow::bail!("`{program} {}` failed with {status}: {stderr}", args.join(" "))
}
