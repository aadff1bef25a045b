use crate::utils::error::{BcastError, Result};
use crate::utils::validation::{validate_optional_path, Validate};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub launcher: LauncherSection,
    #[serde(default)]
    pub defaults: DefaultsSection,
}

/// Executable paths. These behave exactly like `--mpiexec` / `--bcast`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LauncherSection {
    pub mpiexec: Option<PathBuf>,
    pub bcast: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsSection {
    pub destination: Option<PathBuf>,
    pub force: Option<bool>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| BcastError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        let config = Self::from_toml_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        validate_optional_path("launcher.mpiexec", self.launcher.mpiexec.as_deref())?;
        validate_optional_path("launcher.bcast", self.launcher.bcast.as_deref())?;
        validate_optional_path("defaults.destination", self.defaults.destination.as_deref())?;
        Ok(())
    }
}
