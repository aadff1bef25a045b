use crate::domain::model::{LaunchCommand, LaunchOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

pub trait ConfigProvider: Send + Sync {
    fn source(&self) -> &Path;
    fn destination(&self) -> &Path;
    fn mpiexec(&self) -> Option<&Path>;
    fn bcast(&self) -> Option<&Path>;
    fn force(&self) -> bool;
    fn dry_run(&self) -> bool;
}

/// Asks the operator a yes/no question.
#[async_trait]
pub trait Confirmer: Send + Sync {
    async fn confirm(&self, question: &str) -> Result<bool>;
}

/// Spawns a command, waits for it and reports how it ended.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &LaunchCommand) -> LaunchOutcome;
}
