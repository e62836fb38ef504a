// Adapters layer: concrete implementations for external systems.

use crate::domain::model::{CommandSpec, RunOutcome};
use crate::domain::ports::ProcessRunner;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::process::Command;

/// Runs commands as real child processes with inherited stdio, so pip and
/// the launched application write straight to the user's terminal.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner;

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run(&self, spec: &CommandSpec) -> Result<RunOutcome> {
        tracing::debug!("Spawning: {}", spec.display());

        let mut command = Command::new(&spec.program);
        command.args(&spec.args);
        if let Some(cwd) = &spec.cwd {
            command.current_dir(cwd);
        }

        let status = command.status().await?;
        tracing::debug!("Child exited: {:?}", status.code());

        match status.code() {
            Some(code) => Ok(RunOutcome::Exited(code)),
            None => Ok(RunOutcome::Terminated),
        }
    }
}
