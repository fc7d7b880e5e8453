use std::path::Path;

use anyhow::{Context, Result};
use splitflow_solver::{SolveReport, SolverId, SolverProcess};
use tracing::info;

use splitflow_cli::{
    cli::{ModelArgs, SolverArgs},
    config::SplitflowConfig,
};

use super::{generate::write_model, model_spec};

pub fn handle(
    model: &ModelArgs,
    out: Option<&Path>,
    solver: &SolverArgs,
    config: &SplitflowConfig,
) -> Result<()> {
    let spec = model_spec(model, config)?;
    let lp = out.unwrap_or(&config.model.output);
    let stats = write_model(&spec, lp)?;
    info!(
        "Model has {} constraints and {} binaries",
        stats.constraints(),
        stats.binaries
    );

    let solver_id: SolverId = solver.solver.map(SolverId::from).unwrap_or(config.solver.name);
    let timeout = solver.timeout.unwrap_or(config.solver.timeout_seconds);
    let result = solver.result.as_deref().unwrap_or(&config.solver.result);

    let process = match solver.solver_path.as_ref().or(config.solver.path.as_ref()) {
        Some(path) => SolverProcess::new(solver_id, path.clone(), timeout),
        None => SolverProcess::locate(solver_id, timeout)?,
    }
    .with_extra_args(config.solver.args.clone());

    let report = run(&process, lp, result, timeout)
        .with_context(|| format!("solving {} with {}", lp.display(), solver_id))?;

    println!(
        "Solved {} with {} in {:.2}s; solution written to {}",
        lp.display(),
        report.solver,
        report.elapsed.as_secs_f64(),
        report.result_path.display()
    );
    Ok(())
}

fn run(process: &SolverProcess, lp: &Path, result: &Path, timeout: u64) -> Result<SolveReport> {
    if timeout == 0 {
        return Ok(process.solve_blocking(lp, result)?);
    }
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting solver runtime")?;
    Ok(runtime.block_on(process.solve(lp, result))?)
}
