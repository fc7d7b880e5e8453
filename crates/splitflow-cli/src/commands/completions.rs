//! Shell completion scripts for the `splitflow` binary.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap_complete::{generate, Shell};
use tracing::info;

use splitflow_cli::cli::build_cli_command;

pub fn handle(shell: Shell, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating completion script {}", path.display()))?;
            write_completions(shell, BufWriter::new(file))?;
            info!("Wrote {shell} completions to {}", path.display());
        }
        None => write_completions(shell, io::stdout().lock())?,
    }
    Ok(())
}

fn write_completions<W: Write>(shell: Shell, mut writer: W) -> Result<()> {
    let mut cmd = build_cli_command();
    let bin = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin, &mut writer);
    writer.flush()?;
    Ok(())
}
