//! Install command execution
//!
//! This module provides:
//! - The outcome of one install run (exit code and captured streams)
//! - The `CommandExecutor` seam used by the orchestrator
//! - A system executor that spawns the package manager directly

use crate::error::ExecutionError;
use crate::update::InstallCommand;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

/// Exit code reported when the process was terminated by a signal
const SIGNALLED_EXIT_CODE: i32 = -1;

/// Result of running an install command to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// Process exit code
    pub exit_code: i32,
    /// Standard output from the command
    pub stdout: String,
    /// Standard error from the command
    pub stderr: String,
}

impl ExecutionOutcome {
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Whether the command exited with code 0
    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }

    /// Whether anything was written to stderr
    pub fn has_warnings(&self) -> bool {
        !self.stderr.is_empty()
    }
}

/// Runs install commands.
///
/// A non-zero exit is an `Ok` outcome; only failing to run the command at all
/// is an error.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(&self, command: &InstallCommand) -> Result<ExecutionOutcome, ExecutionError>;
}

/// Executor that spawns the real package manager
#[derive(Debug, Clone)]
pub struct SystemExecutor {
    working_dir: PathBuf,
    timeout: Option<Duration>,
}

impl SystemExecutor {
    /// Create an executor running commands in `working_dir`, without a timeout
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            timeout: None,
        }
    }

    /// Kill the command if it runs longer than `timeout`
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl CommandExecutor for SystemExecutor {
    async fn execute(&self, command: &InstallCommand) -> Result<ExecutionOutcome, ExecutionError> {
        tracing::info!("running '{}' in {}", command, self.working_dir.display());

        let mut cmd = tokio::process::Command::new(command.program());
        cmd.args(command.args())
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| ExecutionError::TimedOut {
                    command: command.to_string(),
                    timeout: limit,
                })?,
            None => cmd.output().await,
        }
        .map_err(|e| ExecutionError::spawn_failed(command.to_string(), e))?;

        let outcome = ExecutionOutcome::new(
            output.status.code().unwrap_or(SIGNALLED_EXIT_CODE),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
        tracing::debug!("'{}' exited with {}", command, outcome.exit_code);

        Ok(outcome)
    }
}
