//! External MILP solver invocation for splitflow models.
//!
//! Solving is delegated to an external process that reads the LP file written
//! by `splitflow-core`. This crate only knows how to find the solver, build
//! its command line, capture its stdout into a result file and surface its
//! exit status. The solver's output is not parsed.
//!
//! ```text
//! flow.lp ──> cplex -c "read flow.lp" "optimize" "display solution variables -"
//!                 │
//!                 ├─stdout──> flow_sol.txt
//!                 └─status──> Ok(SolveReport) | Err(SolverError::ProcessFailed)
//! ```
//!
//! # Supported Solvers
//!
//! | Solver | Binary | Notes |
//! |--------|--------|-------|
//! | CPLEX  | `cplex` | Interactive optimizer, prints solution variables |
//! | CBC    | `cbc` | COIN-OR Branch and Cut |
//! | GLPK   | `glpsol` | GNU Linear Programming Kit |
//! | HiGHS  | `highs` | High-performance LP/MIP |

pub mod error;
pub mod subprocess;

pub use error::{ExitCode, SolverError, SolverResult};
pub use subprocess::{SolveReport, SolverProcess};

use std::ffi::OsString;
use std::path::Path;

/// External solvers that can consume the generated LP file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolverId {
    /// IBM ILOG CPLEX interactive optimizer.
    #[default]
    Cplex,
    /// CBC - COIN-OR Branch and Cut for MIP.
    Cbc,
    /// GLPK stand-alone solver.
    Glpk,
    /// HiGHS - High-performance LP/MIP solver.
    Highs,
}

impl SolverId {
    /// Get the binary name for this solver.
    pub fn binary_name(&self) -> &'static str {
        match self {
            SolverId::Cplex => "cplex",
            SolverId::Cbc => "cbc",
            SolverId::Glpk => "glpsol",
            SolverId::Highs => "highs",
        }
    }

    /// Get the display name for this solver.
    pub fn display_name(&self) -> &'static str {
        match self {
            SolverId::Cplex => "CPLEX",
            SolverId::Cbc => "CBC",
            SolverId::Glpk => "GLPK",
            SolverId::Highs => "HiGHS",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SolverId::Cplex => "Commercial LP/MIP optimizer",
            SolverId::Cbc => "MIP branch-and-cut",
            SolverId::Glpk => "GNU LP/MIP kit",
            SolverId::Highs => "LP/MIP high-performance",
        }
    }

    /// Arguments that make the solver read `lp` and report the solution on
    /// stdout.
    pub fn args(&self, lp: &Path) -> Vec<OsString> {
        let lp = lp.as_os_str().to_os_string();
        match self {
            SolverId::Cplex => {
                let mut read = OsString::from("read ");
                read.push(&lp);
                vec![
                    "-c".into(),
                    read,
                    "optimize".into(),
                    "display solution variables -".into(),
                ]
            }
            SolverId::Cbc => vec![lp, "solve".into(), "solution".into(), "stdout".into()],
            SolverId::Glpk => vec!["--lp".into(), lp, "-o".into(), "/dev/stdout".into()],
            SolverId::Highs => vec!["--model_file".into(), lp],
        }
    }

    /// Get all known solver IDs.
    pub fn all() -> &'static [SolverId] {
        &[SolverId::Cplex, SolverId::Cbc, SolverId::Glpk, SolverId::Highs]
    }
}

impl std::fmt::Display for SolverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for SolverId {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cplex" => Ok(SolverId::Cplex),
            "cbc" => Ok(SolverId::Cbc),
            "glpk" | "glpsol" => Ok(SolverId::Glpk),
            "highs" => Ok(SolverId::Highs),
            _ => Err(SolverError::UnknownSolver(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cplex_command_line() {
        let args = SolverId::Cplex.args(&PathBuf::from("flow.lp"));
        assert_eq!(
            args,
            vec![
                OsString::from("-c"),
                OsString::from("read flow.lp"),
                OsString::from("optimize"),
                OsString::from("display solution variables -"),
            ]
        );
    }

    #[test]
    fn test_every_solver_reads_the_model() {
        let lp = PathBuf::from("/tmp/model.lp");
        for id in SolverId::all() {
            let args = id.args(&lp);
            assert!(
                args.iter().any(|a| a.to_string_lossy().contains("model.lp")),
                "{id} does not reference the model"
            );
        }
    }

    #[test]
    fn test_solver_id_from_str() {
        assert_eq!("CPLEX".parse::<SolverId>().unwrap(), SolverId::Cplex);
        assert_eq!("glpsol".parse::<SolverId>().unwrap(), SolverId::Glpk);
        assert!(matches!(
            "gurobi".parse::<SolverId>(),
            Err(SolverError::UnknownSolver(_))
        ));
    }
}
