use crate::domain::model::Tool;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BcastError {
    #[error("Invalid value for '{field}': {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Source '{}' does not exist", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Could not find {tool}")]
    ExecutableNotFound { tool: Tool },

    #[error("MPI command failed with exit code {code}")]
    ChildFailed { code: i32 },

    #[error("Command not found: {command}")]
    CommandNotFound { command: String },

    #[error("Failed to execute {command}: {source}")]
    LaunchFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Filesystem,
    Environment,
    Execution,
    Configuration,
}

impl BcastError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BcastError::InvalidArgument { .. } => ErrorCategory::Usage,
            BcastError::SourceNotFound { .. } | BcastError::IoError(_) => {
                ErrorCategory::Filesystem
            }
            BcastError::ExecutableNotFound { .. } => ErrorCategory::Environment,
            BcastError::ChildFailed { .. }
            | BcastError::CommandNotFound { .. }
            | BcastError::LaunchFailed { .. } => ErrorCategory::Execution,
            BcastError::ConfigError { .. } | BcastError::TomlError(_) => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BcastError::InvalidArgument { field, .. } => {
                format!("Check the value passed for '{}', see --help", field)
            }
            BcastError::SourceNotFound { .. } => {
                "Check the source path for typos and that it is visible from this node".to_string()
            }
            BcastError::ExecutableNotFound { tool } => tool.remediation().to_string(),
            BcastError::ChildFailed { .. } => {
                "Inspect the MPI launcher output above for the failing node".to_string()
            }
            BcastError::CommandNotFound { .. } => {
                "Make sure the launcher path exists and is executable, or pass --mpiexec"
                    .to_string()
            }
            BcastError::LaunchFailed { .. } => {
                "Check the permissions of the MPI launcher".to_string()
            }
            BcastError::ConfigError { .. } | BcastError::TomlError(_) => {
                "Make sure the config file exists and is valid TOML".to_string()
            }
            BcastError::IoError(_) => "Check file system permissions".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BcastError::ExecutableNotFound { tool } => {
                format!("Error: Could not find {}. {}", tool, tool.remediation())
            }
            other => format!("Error: {}", other),
        }
    }

    /// Every failure maps to 1; the launcher's own code is reported, never reused.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, BcastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_failure_reports_code_but_exits_one() {
        let err = BcastError::ChildFailed { code: 3 };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "MPI command failed with exit code 3");
        assert_eq!(err.category(), ErrorCategory::Execution);
    }

    #[test]
    fn test_missing_executable_message_names_flag() {
        let err = BcastError::ExecutableNotFound {
            tool: Tool::MpiLauncher,
        };
        assert_eq!(
            err.user_friendly_message(),
            "Error: Could not find mpiexec/mpirun. Please specify with --mpiexec"
        );

        let err = BcastError::ExecutableNotFound { tool: Tool::Bcast };
        assert!(err.user_friendly_message().contains("--bcast"));
        assert_eq!(err.category(), ErrorCategory::Environment);
    }
}
