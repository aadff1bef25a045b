use crate::domain::model::{LaunchCommand, LaunchOutcome};
use crate::utils::error::{BcastError, Result};
use std::io::ErrorKind;
use std::path::Path;

/// Instances of bcast started on each node.
pub const PROCESSES_PER_NODE: u32 = 1;

/// `<launcher> -ppn 1 <bcast> <source> <destination>`
pub fn build_command(
    launcher: &Path,
    bcast: &Path,
    source: &Path,
    destination: &Path,
) -> LaunchCommand {
    LaunchCommand::new(launcher)
        .arg("-ppn")
        .arg(PROCESSES_PER_NODE.to_string())
        .arg(bcast)
        .arg(source)
        .arg(destination)
}

pub fn interpret_outcome(command: &LaunchCommand, outcome: LaunchOutcome) -> Result<()> {
    let program = command.program().to_string_lossy().into_owned();
    match outcome {
        LaunchOutcome::Succeeded => Ok(()),
        LaunchOutcome::FailedWithCode(code) => Err(BcastError::ChildFailed { code }),
        LaunchOutcome::LaunchFailed(e) if e.kind() == ErrorKind::NotFound => {
            Err(BcastError::CommandNotFound { command: program })
        }
        LaunchOutcome::LaunchFailed(source) => Err(BcastError::LaunchFailed {
            command: program,
            source,
        }),
    }
}
