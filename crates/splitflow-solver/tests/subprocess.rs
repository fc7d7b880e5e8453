//! Solver invocation against stand-in shell scripts.
#![cfg(unix)]

use splitflow_solver::{ExitCode, SolverError, SolverId, SolverProcess};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn fake_solver(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("fake-solver");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn model(dir: &TempDir) -> PathBuf {
    let lp = dir.path().join("flow.lp");
    fs::write(&lp, "Minimize\nr\nSubject to\nEnd\n").unwrap();
    lp
}

#[test]
fn test_stdout_is_captured_in_result_file() {
    let dir = tempdir().unwrap();
    let lp = model(&dir);
    let result = dir.path().join("flow_sol.txt");
    let solver = fake_solver(dir.path(), r#"echo "args: $1 | $2 | $3""#);

    let report = SolverProcess::new(SolverId::Cplex, solver, 0)
        .solve_blocking(&lp, &result)
        .unwrap();

    assert_eq!(report.exit_code, ExitCode::Success);
    assert_eq!(report.result_path, result);
    let captured = fs::read_to_string(&result).unwrap();
    assert_eq!(
        captured.trim(),
        format!("args: -c | read {} | optimize", lp.display())
    );
}

#[test]
fn test_nonzero_exit_is_surfaced() {
    let dir = tempdir().unwrap();
    let lp = model(&dir);
    let result = dir.path().join("flow_sol.txt");
    let solver = fake_solver(dir.path(), "echo 'license expired' >&2\nexit 3");

    let err = SolverProcess::new(SolverId::Cbc, solver, 0)
        .solve_blocking(&lp, &result)
        .unwrap_err();

    match err {
        SolverError::ProcessFailed {
            solver,
            exit_code,
            message,
            ..
        } => {
            assert_eq!(solver, SolverId::Cbc);
            assert_eq!(exit_code, ExitCode::Failure(3));
            assert_eq!(message, "license expired");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_binary_fails_to_start() {
    let dir = tempdir().unwrap();
    let lp = model(&dir);
    let result = dir.path().join("out.txt");
    let err = SolverProcess::new(SolverId::Highs, dir.path().join("no-such-solver"), 0)
        .solve_blocking(&lp, &result)
        .unwrap_err();
    assert!(matches!(err, SolverError::ProcessStart { .. }));
    assert!(!result.exists());
}

#[tokio::test]
async fn test_async_missing_binary_leaves_no_result_file() {
    let dir = tempdir().unwrap();
    let lp = model(&dir);
    let result = dir.path().join("flow_sol.txt");
    let err = SolverProcess::new(SolverId::Cplex, dir.path().join("no-such-solver"), 5)
        .solve(&lp, &result)
        .await
        .unwrap_err();
    assert!(matches!(err, SolverError::ProcessStart { .. }));
    assert!(!result.exists());
}

#[test]
fn test_missing_model_is_rejected_before_spawn() {
    let dir = tempdir().unwrap();
    let solver = fake_solver(dir.path(), "exit 0");
    let result = dir.path().join("out.txt");
    let err = SolverProcess::new(SolverId::Glpk, solver, 0)
        .solve_blocking(&dir.path().join("absent.lp"), &result)
        .unwrap_err();
    assert!(matches!(err, SolverError::ModelMissing(_)));
    assert!(!result.exists());
}

#[tokio::test]
async fn test_async_solve_succeeds() {
    let dir = tempdir().unwrap();
    let lp = model(&dir);
    let result = dir.path().join("flow_sol.txt");
    let solver = fake_solver(dir.path(), "echo optimal");

    let report = SolverProcess::new(SolverId::Cplex, solver, 30)
        .solve(&lp, &result)
        .await
        .unwrap();
    assert!(report.exit_code.is_success());
    assert_eq!(fs::read_to_string(&result).unwrap(), "optimal\n");
}

#[tokio::test]
async fn test_async_solve_times_out() {
    let dir = tempdir().unwrap();
    let lp = model(&dir);
    let solver = fake_solver(dir.path(), "sleep 10");

    let err = SolverProcess::new(SolverId::Cplex, solver, 1)
        .solve(&lp, &dir.path().join("flow_sol.txt"))
        .await
        .unwrap_err();
    assert!(matches!(err, SolverError::Timeout { seconds: 1 }));
}
