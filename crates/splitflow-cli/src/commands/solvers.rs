//! Known solvers and where their binaries were found.

use std::io::{self, Write};

use anyhow::Result;
use splitflow_solver::{SolverId, SolverProcess};
use tabwriter::TabWriter;

pub fn handle() -> Result<()> {
    let mut writer = TabWriter::new(io::stdout()).padding(2);
    writeln!(writer, "SOLVER\tBINARY\tSTATUS\tDESCRIPTION")?;
    for &id in SolverId::all() {
        let status = match SolverProcess::find_binary(id) {
            Ok(path) => path.display().to_string(),
            Err(_) => "not found".to_string(),
        };
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            id,
            id.binary_name(),
            status,
            id.description()
        )?;
    }
    writer.flush()?;
    Ok(())
}
