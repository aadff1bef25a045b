use std::ffi::{OsStr, OsString};
use std::fmt;

/// External programs this front-end needs to find before it can launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    MpiLauncher,
    Bcast,
}

impl Tool {
    /// Command-line flag that overrides discovery for this tool.
    pub fn flag(&self) -> &'static str {
        match self {
            Tool::MpiLauncher => "--mpiexec",
            Tool::Bcast => "--bcast",
        }
    }

    pub fn remediation(&self) -> &'static str {
        match self {
            Tool::MpiLauncher => "Please specify with --mpiexec",
            Tool::Bcast => "Please build it first or specify with --bcast",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::MpiLauncher => write!(f, "mpiexec/mpirun"),
            Tool::Bcast => write!(f, "bcast executable"),
        }
    }
}

/// Fully assembled argument vector handed to the MPI launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    argv: Vec<OsString>,
}

impl LaunchCommand {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            argv: vec![program.into()],
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.argv.push(arg.into());
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.argv[0]
    }

    pub fn args(&self) -> &[OsString] {
        &self.argv[1..]
    }

    pub fn argv(&self) -> &[OsString] {
        &self.argv
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<_> = self.argv.iter().map(|a| a.to_string_lossy()).collect();
        write!(f, "{}", parts.join(" "))
    }
}

/// What happened when the launcher was spawned and awaited.
#[derive(Debug)]
pub enum LaunchOutcome {
    Succeeded,
    /// Non-zero exit. A child killed by signal `n` reports `-n`.
    FailedWithCode(i32),
    LaunchFailed(std::io::Error),
}

#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    /// The user declined to overwrite an existing entry.
    Cancelled,
    DryRun(LaunchCommand),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_command_display_joins_with_spaces() {
        let cmd = LaunchCommand::new("/usr/bin/mpiexec")
            .arg("-ppn")
            .arg("1")
            .arg("/usr/local/bin/bcast");

        assert_eq!(cmd.program(), OsStr::new("/usr/bin/mpiexec"));
        assert_eq!(cmd.args().len(), 3);
        assert_eq!(
            cmd.to_string(),
            "/usr/bin/mpiexec -ppn 1 /usr/local/bin/bcast"
        );
    }

    #[test]
    fn test_tool_flags() {
        assert_eq!(Tool::MpiLauncher.flag(), "--mpiexec");
        assert_eq!(Tool::Bcast.flag(), "--bcast");
        assert_eq!(Tool::MpiLauncher.to_string(), "mpiexec/mpirun");
    }
}
