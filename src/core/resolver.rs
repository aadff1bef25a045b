use crate::domain::model::Tool;
use crate::utils::error::{BcastError, Result};
use std::path::{Path, PathBuf};

/// Launcher names, tried in order.
pub const MPI_LAUNCHERS: [&str; 2] = ["mpiexec", "mpirun"];
pub const BCAST_EXECUTABLE: &str = "bcast";

/// Ordered list of directories consulted for bare command names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs
                .into_iter()
                .map(Into::into)
                .filter(|d: &PathBuf| !d.as_os_str().is_empty())
                .collect(),
        }
    }

    pub fn from_env() -> Self {
        match std::env::var_os("PATH") {
            Some(path) => Self::new(std::env::split_paths(&path)),
            None => Self::default(),
        }
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }
}

/// Looks `name` up in each directory of `search_path`, first match wins.
///
/// Only the directories given are consulted; the process environment is not.
pub fn find_executable(name: &str, search_path: &SearchPath, cwd: &Path) -> Option<PathBuf> {
    search_path
        .dirs()
        .iter()
        .find_map(|dir| which::which_in(name, Some(dir), cwd).ok())
}

fn resolve(
    tool: Tool,
    candidates: &[&str],
    override_path: Option<&Path>,
    search_path: &SearchPath,
    cwd: &Path,
) -> Result<PathBuf> {
    if let Some(path) = override_path {
        tracing::debug!("Using {} from {}: {}", tool, tool.flag(), path.display());
        return Ok(path.to_path_buf());
    }

    for name in candidates {
        if let Some(found) = find_executable(name, search_path, cwd) {
            tracing::debug!("Resolved {} to {}", name, found.display());
            return Ok(found);
        }
        tracing::debug!("{} not found on search path", name);
    }

    Err(BcastError::ExecutableNotFound { tool })
}

pub fn resolve_launcher(
    override_path: Option<&Path>,
    search_path: &SearchPath,
    cwd: &Path,
) -> Result<PathBuf> {
    resolve(Tool::MpiLauncher, &MPI_LAUNCHERS, override_path, search_path, cwd)
}

pub fn resolve_bcast(
    override_path: Option<&Path>,
    search_path: &SearchPath,
    cwd: &Path,
) -> Result<PathBuf> {
    resolve(Tool::Bcast, &[BCAST_EXECUTABLE], override_path, search_path, cwd)
}
