//! Subprocess management for external solvers.
//!
//! Handles locating solver binaries and running them with stdout redirected
//! into a result file.

use crate::error::{ExitCode, SolverError, SolverResult};
use crate::SolverId;
use std::ffi::OsString;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Number of trailing stderr lines kept in error messages.
const STDERR_TAIL_LINES: usize = 20;

/// Outcome of a successful solver run.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub solver: SolverId,
    pub binary: PathBuf,
    pub exit_code: ExitCode,
    /// File holding the solver's stdout.
    pub result_path: PathBuf,
    pub elapsed: Duration,
}

/// A solver subprocess handle.
pub struct SolverProcess {
    /// The solver being used.
    solver_id: SolverId,
    /// Path to the solver binary.
    binary_path: PathBuf,
    /// Timeout for solver execution (0 = wait indefinitely).
    timeout_seconds: u64,
    /// Appended after the solver's own arguments.
    extra_args: Vec<String>,
}

impl SolverProcess {
    /// Create a new solver process handle.
    pub fn new(solver_id: SolverId, binary_path: PathBuf, timeout_seconds: u64) -> Self {
        Self {
            solver_id,
            binary_path,
            timeout_seconds,
            extra_args: Vec::new(),
        }
    }

    /// Handle for the binary found by [`SolverProcess::find_binary`].
    pub fn locate(solver_id: SolverId, timeout_seconds: u64) -> SolverResult<Self> {
        let binary = Self::find_binary(solver_id)?;
        Ok(Self::new(solver_id, binary, timeout_seconds))
    }

    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    /// Find the solver binary in standard locations.
    ///
    /// Search order:
    /// 1. ~/.splitflow/solvers/<binary_name>
    /// 2. System PATH
    pub fn find_binary(solver_id: SolverId) -> SolverResult<PathBuf> {
        let binary_name = solver_id.binary_name();

        if let Some(home) = dirs::home_dir() {
            let local = home.join(".splitflow").join("solvers").join(binary_name);
            if local.exists() {
                return Ok(local);
            }
        }

        if let Ok(path) = which::which(binary_name) {
            return Ok(path);
        }

        Err(SolverError::NotInstalled {
            solver: solver_id,
            binary: binary_name.to_string(),
        })
    }

    /// Get the solver ID.
    pub fn solver_id(&self) -> SolverId {
        self.solver_id
    }

    /// Get the binary path.
    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    /// Full argument list for solving `lp`.
    pub fn command_args(&self, lp: &Path) -> Vec<OsString> {
        let mut args = self.solver_id.args(lp);
        args.extend(self.extra_args.iter().map(OsString::from));
        args
    }

    fn prepare(&self, lp: &Path, result: &Path) -> SolverResult<File> {
        if !lp.exists() {
            return Err(SolverError::ModelMissing(lp.to_path_buf()));
        }
        let file = File::create(result).map_err(|source| SolverError::ResultFile {
            path: result.to_path_buf(),
            source,
        })?;
        info!(
            "Running {} on {} (stdout -> {})",
            self.solver_id,
            lp.display(),
            result.display()
        );
        debug!(
            "{} {:?}",
            self.binary_path.display(),
            self.command_args(lp)
        );
        Ok(file)
    }

    /// The solver never ran, so the empty result file is removed.
    fn start_failed(&self, result: &Path, source: std::io::Error) -> SolverError {
        if let Err(err) = std::fs::remove_file(result) {
            warn!("Could not remove {}: {err}", result.display());
        }
        SolverError::ProcessStart {
            binary: self.binary_path.clone(),
            source,
        }
    }

    fn finish(
        &self,
        status: std::process::ExitStatus,
        stderr: &[u8],
        result: &Path,
        started: Instant,
    ) -> SolverResult<SolveReport> {
        let exit_code = ExitCode::from_status(status);
        let elapsed = started.elapsed();

        if !exit_code.is_success() {
            warn!("{} exited with {}", self.solver_id, exit_code);
            return Err(SolverError::ProcessFailed {
                solver: self.solver_id,
                exit_code,
                result: result.to_path_buf(),
                message: stderr_tail(stderr),
            });
        }

        info!(
            "{} finished in {}ms",
            self.solver_id,
            elapsed.as_millis()
        );
        Ok(SolveReport {
            solver: self.solver_id,
            binary: self.binary_path.clone(),
            exit_code,
            result_path: result.to_path_buf(),
            elapsed,
        })
    }

    /// Run the solver synchronously (blocking).
    ///
    /// Timeouts are not enforced here; use [`SolverProcess::solve`] for that.
    pub fn solve_blocking(&self, lp: &Path, result: &Path) -> SolverResult<SolveReport> {
        use std::process::Command;

        let stdout = self.prepare(lp, result)?;
        let started = Instant::now();

        let output = Command::new(&self.binary_path)
            .args(self.command_args(lp))
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| self.start_failed(result, source))?;

        self.finish(output.status, &output.stderr, result, started)
    }

    /// Run the solver asynchronously, killing it if the timeout elapses.
    pub async fn solve(&self, lp: &Path, result: &Path) -> SolverResult<SolveReport> {
        use tokio::process::Command;
        use tokio::time::timeout;

        let stdout = self.prepare(lp, result)?;
        let started = Instant::now();

        let child = Command::new(&self.binary_path)
            .args(self.command_args(lp))
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| self.start_failed(result, source))?;

        let output = if self.timeout_seconds > 0 {
            // Dropping the child on timeout kills it.
            timeout(
                Duration::from_secs(self.timeout_seconds),
                child.wait_with_output(),
            )
            .await
            .map_err(|_| SolverError::Timeout {
                seconds: self.timeout_seconds,
            })??
        } else {
            child.wait_with_output().await?
        };

        self.finish(output.status, &output.stderr, result, started)
    }
}

fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.trim_end().lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}

/// Check if a solver binary can be found.
pub fn is_solver_installed(solver_id: SolverId) -> bool {
    SolverProcess::find_binary(solver_id).is_ok()
}

/// Get a list of all installed solvers.
pub fn list_installed_solvers() -> Vec<SolverId> {
    SolverId::all()
        .iter()
        .copied()
        .filter(|&id| is_solver_installed(id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_tail_keeps_last_lines() {
        let text: String = (0..30).map(|i| format!("line {i}\n")).collect();
        let tail = stderr_tail(text.as_bytes());
        assert!(tail.starts_with("line 10"));
        assert!(tail.ends_with("line 29"));
    }

    #[test]
    fn test_extra_args_follow_solver_args() {
        let process = SolverProcess::new(SolverId::Highs, PathBuf::from("highs"), 0)
            .with_extra_args(vec!["--time_limit".into(), "60".into()]);
        let args = process.command_args(Path::new("flow.lp"));
        assert_eq!(args.len(), 4);
        assert_eq!(args[2], OsString::from("--time_limit"));
    }

    #[test]
    fn test_list_installed_does_not_panic() {
        // May find solvers if they're installed
        let _installed = list_installed_solvers();
    }
}
