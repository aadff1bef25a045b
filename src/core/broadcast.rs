use crate::core::launcher::{build_command, interpret_outcome, PROCESSES_PER_NODE};
use crate::core::resolver::{resolve_bcast, resolve_launcher, SearchPath};
use crate::core::validator::{absolutize, check_source_exists, confirm_overwrite, find_collision};
use crate::domain::model::RunOutcome;
use crate::domain::ports::{CommandRunner, ConfigProvider, Confirmer};
use crate::utils::error::Result;
use crate::utils::validation::{validate_optional_path, validate_path};
use std::path::PathBuf;

/// Drives one broadcast: validate, resolve, confirm, launch.
pub struct BroadcastEngine<C, F, R> {
    config: C,
    confirmer: F,
    runner: R,
    search_path: Option<SearchPath>,
    working_dir: Option<PathBuf>,
}

impl<C, F, R> BroadcastEngine<C, F, R>
where
    C: ConfigProvider,
    F: Confirmer,
    R: CommandRunner,
{
    pub fn new(config: C, confirmer: F, runner: R) -> Self {
        Self {
            config,
            confirmer,
            runner,
            search_path: None,
            working_dir: None,
        }
    }

    /// Replaces the `PATH` lookup with a fixed directory list.
    pub fn with_search_path(mut self, search_path: SearchPath) -> Self {
        self.search_path = Some(search_path);
        self
    }

    /// Base for relative source/destination arguments instead of the process cwd.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn confirmer(&self) -> &F {
        &self.confirmer
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        validate_path("source", self.config.source())?;
        validate_path("destination", self.config.destination())?;
        validate_optional_path("mpiexec", self.config.mpiexec())?;
        validate_optional_path("bcast", self.config.bcast())?;

        let cwd = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        let search_path = self
            .search_path
            .clone()
            .unwrap_or_else(SearchPath::from_env);

        let source = absolutize(self.config.source(), &cwd);
        let destination = absolutize(self.config.destination(), &cwd);
        check_source_exists(&source)?;

        let launcher = resolve_launcher(self.config.mpiexec(), &search_path, &cwd)?;
        let bcast = resolve_bcast(self.config.bcast(), &search_path, &cwd)?;

        if self.config.force() {
            tracing::debug!("--force given, skipping overwrite check");
        } else if self.config.dry_run() {
            if let Some(target) = find_collision(&source, &destination) {
                tracing::warn!("{} already exists and would be overwritten", target.display());
            }
        } else if !confirm_overwrite(&self.confirmer, &source, &destination).await? {
            println!("Operation cancelled.");
            return Ok(RunOutcome::Cancelled);
        }

        let command = build_command(&launcher, &bcast, &source, &destination);
        println!(
            "Broadcasting {} to {} using {} process per node...",
            source.display(),
            destination.display(),
            PROCESSES_PER_NODE
        );
        println!("Command: {}", command);
        println!();

        if self.config.dry_run() {
            tracing::info!("Dry run, not launching");
            return Ok(RunOutcome::DryRun(command));
        }

        let outcome = self.runner.run(&command).await;
        interpret_outcome(&command, outcome)?;

        println!("Broadcast completed successfully.");
        Ok(RunOutcome::Completed)
    }
}
