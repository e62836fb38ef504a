use crate::domain::model::{CommandSpec, RunOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Seam between orchestration code and real child processes. The production
/// adapter spawns through tokio; tests substitute a recording runner.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, spec: &CommandSpec) -> Result<RunOutcome>;
}
