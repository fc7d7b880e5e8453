use std::path::Path;

use anyhow::{Context, Result};
use splitflow_core::{emit, ModelSpec, ModelStats};
use tracing::info;

use splitflow_cli::{cli::ModelArgs, config::SplitflowConfig};

use super::model_spec;

pub fn handle(model: &ModelArgs, out: Option<&Path>, config: &SplitflowConfig) -> Result<()> {
    let spec = model_spec(model, config)?;
    let out = out.unwrap_or(&config.model.output);
    let stats = write_model(&spec, out)?;
    println!(
        "Wrote {} ({} constraints, {} binaries)",
        out.display(),
        stats.constraints(),
        stats.binaries
    );
    Ok(())
}

/// Generate and write the LP file; shared with `solve`.
pub(crate) fn write_model(spec: &ModelSpec, out: &Path) -> Result<ModelStats> {
    info!("Generating {} model into {}", spec.dims, out.display());
    let stats = emit::generate_lp_file(spec, out)
        .with_context(|| format!("generating {}", out.display()))?;
    Ok(stats)
}
