pub mod settings;
pub mod toml_config;

pub use settings::{Settings, DEFAULT_DESTINATION};

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_optional_path, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
const EXAMPLES: &str = "Examples:
  mpi-bcast /path/to/source/file
  mpi-bcast /path/to/source/file /destination/path
  mpi-bcast /path/to/directory /shared/storage
  mpi-bcast --force /path/to/large/dataset /shared/storage";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "mpi-bcast", version)]
#[command(about = "MPI broadcast file distribution tool")]
#[command(after_help = EXAMPLES)]
pub struct CliConfig {
    /// Source file or directory to broadcast
    pub source: PathBuf,

    /// Destination directory (default: /tmp)
    pub destination: Option<PathBuf>,

    /// Path to mpiexec executable (auto-detected if not specified)
    #[arg(long, value_name = "PATH")]
    pub mpiexec: Option<PathBuf>,

    /// Path to bcast executable (auto-detected if not specified)
    #[arg(long, value_name = "PATH")]
    pub bcast: Option<PathBuf>,

    /// Skip overwrite confirmation
    #[arg(long)]
    pub force: bool,

    /// Print the MPI command without running it
    #[arg(long)]
    pub dry_run: bool,

    /// TOML file with launcher paths and defaults
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source(&self) -> &Path {
        &self.source
    }

    fn destination(&self) -> &Path {
        self.destination
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_DESTINATION))
    }

    fn mpiexec(&self) -> Option<&Path> {
        self.mpiexec.as_deref()
    }

    fn bcast(&self) -> Option<&Path> {
        self.bcast.as_deref()
    }

    fn force(&self) -> bool {
        self.force
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("source", &self.source)?;
        validate_optional_path("destination", self.destination.as_deref())?;
        validate_optional_path("mpiexec", self.mpiexec.as_deref())?;
        validate_optional_path("bcast", self.bcast.as_deref())?;
        Ok(())
    }
}
