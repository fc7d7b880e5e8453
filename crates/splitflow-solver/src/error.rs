//! Error types and exit codes for solver invocation.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// How a solver process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Exit status 0
    Success,
    /// Non-zero exit status
    Failure(i32),
    /// Killed by a signal (unix), with the signal number when known
    Terminated(Option<i32>),
}

impl ExitCode {
    /// Convert a process status into an ExitCode.
    pub fn from_status(status: ExitStatus) -> Self {
        match status.code() {
            Some(0) => ExitCode::Success,
            Some(code) => ExitCode::Failure(code),
            None => ExitCode::Terminated(signal_of(status)),
        }
    }

    /// Check if this exit code indicates success.
    pub fn is_success(&self) -> bool {
        matches!(self, ExitCode::Success)
    }
}

#[cfg(unix)]
fn signal_of(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn signal_of(_status: ExitStatus) -> Option<i32> {
    None
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExitCode::Success => write!(f, "exit code 0"),
            ExitCode::Failure(code) => write!(f, "exit code {code}"),
            ExitCode::Terminated(Some(signal)) => write!(f, "terminated by signal {signal}"),
            ExitCode::Terminated(None) => write!(f, "terminated without exit code"),
        }
    }
}

/// Errors that can occur while running an external solver.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Unknown solver ID.
    #[error("Unknown solver: {0}")]
    UnknownSolver(String),

    /// Solver binary was not found.
    #[error("Solver {solver} is not installed: `{binary}` not found in ~/.splitflow/solvers or PATH")]
    NotInstalled {
        solver: crate::SolverId,
        binary: String,
    },

    /// The model file handed to the solver does not exist.
    #[error("Model file {} does not exist", .0.display())]
    ModelMissing(PathBuf),

    /// Solver process failed to start.
    #[error("Failed to start solver process {}: {source}", binary.display())]
    ProcessStart {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Solver process exited unsuccessfully.
    #[error("Solver {solver} failed with {exit_code} (output in {}): {message}", result.display())]
    ProcessFailed {
        solver: crate::SolverId,
        exit_code: ExitCode,
        result: PathBuf,
        message: String,
    },

    /// Timeout while waiting for solver.
    #[error("Solver timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    /// The result file could not be created.
    #[error("Cannot create result file {}: {source}", path.display())]
    ResultFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for solver operations.
pub type SolverResult<T> = Result<T, SolverError>;

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;

    #[test]
    fn test_exit_code_from_status() {
        assert_eq!(ExitCode::from_status(ExitStatus::from_raw(0)), ExitCode::Success);
        // raw wait status: exit code lives in the high byte
        assert_eq!(
            ExitCode::from_status(ExitStatus::from_raw(3 << 8)),
            ExitCode::Failure(3)
        );
        assert_eq!(
            ExitCode::from_status(ExitStatus::from_raw(9)),
            ExitCode::Terminated(Some(9))
        );
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(ExitCode::Failure(2).to_string(), "exit code 2");
        assert_eq!(
            ExitCode::Terminated(Some(11)).to_string(),
            "terminated by signal 11"
        );
        assert!(!ExitCode::Failure(1).is_success());
    }
}
