use crate::domain::model::{LaunchCommand, LaunchOutcome};
use crate::domain::ports::CommandRunner;
use async_trait::async_trait;
use std::process::ExitStatus;
use tokio::process::Command;

/// Runs the launcher as a child process sharing this process's stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

fn exit_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, command: &LaunchCommand) -> LaunchOutcome {
        tracing::debug!("Spawning: {}", command);

        match Command::new(command.program())
            .args(command.args())
            .status()
            .await
        {
            Ok(status) if status.success() => LaunchOutcome::Succeeded,
            Ok(status) => {
                tracing::debug!("Launcher exited with {}", status);
                LaunchOutcome::FailedWithCode(exit_code(&status))
            }
            Err(e) => {
                tracing::error!("Error launching {}: {}", command.program().to_string_lossy(), e);
                LaunchOutcome::LaunchFailed(e)
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[tokio::test]
    async fn test_successful_child() {
        let cmd = LaunchCommand::new("sh").arg("-c").arg("exit 0");
        assert!(matches!(
            SystemRunner::new().run(&cmd).await,
            LaunchOutcome::Succeeded
        ));
    }

    #[tokio::test]
    async fn test_exit_code_surfaced() {
        let cmd = LaunchCommand::new("sh").arg("-c").arg("exit 3");
        assert!(matches!(
            SystemRunner::new().run(&cmd).await,
            LaunchOutcome::FailedWithCode(3)
        ));
    }

    #[tokio::test]
    async fn test_signal_reported_as_negative_code() {
        let cmd = LaunchCommand::new("sh").arg("-c").arg("kill -9 $$");
        assert!(matches!(
            SystemRunner::new().run(&cmd).await,
            LaunchOutcome::FailedWithCode(-9)
        ));
    }

    #[tokio::test]
    async fn test_missing_program() {
        let cmd = LaunchCommand::new("/nonexistent/bin/mpiexec").arg("-ppn");
        match SystemRunner::new().run(&cmd).await {
            LaunchOutcome::LaunchFailed(e) => assert_eq!(e.kind(), ErrorKind::NotFound),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
