use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_optional_path, validate_path, Validate};
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
use crate::config::{toml_config::FileConfig, CliConfig};

pub const DEFAULT_DESTINATION: &str = "/tmp";

/// Effective configuration: command line over config file over defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub mpiexec: Option<PathBuf>,
    pub bcast: Option<PathBuf>,
    pub force: bool,
    pub dry_run: bool,
}

impl Settings {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: PathBuf::from(DEFAULT_DESTINATION),
            mpiexec: None,
            bcast: None,
            force: false,
            dry_run: false,
        }
    }

    #[cfg(feature = "cli")]
    pub fn merge(cli: &CliConfig, file: Option<FileConfig>) -> Self {
        let file = file.unwrap_or_default();

        Self {
            source: cli.source.clone(),
            destination: cli
                .destination
                .clone()
                .or(file.defaults.destination)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DESTINATION)),
            mpiexec: cli.mpiexec.clone().or(file.launcher.mpiexec),
            bcast: cli.bcast.clone().or(file.launcher.bcast),
            force: cli.force || file.defaults.force.unwrap_or(false),
            dry_run: cli.dry_run,
        }
    }

    #[cfg(feature = "cli")]
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading config file {}", path.display());
                Some(FileConfig::from_file(path)?)
            }
            None => None,
        };
        let settings = Self::merge(cli, file);
        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for Settings {
    fn source(&self) -> &Path {
        &self.source
    }

    fn destination(&self) -> &Path {
        &self.destination
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

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("source", &self.source)?;
        validate_path("destination", &self.destination)?;
        validate_optional_path("mpiexec", self.mpiexec.as_deref())?;
        validate_optional_path("bcast", self.bcast.as_deref())?;
        Ok(())
    }
}
