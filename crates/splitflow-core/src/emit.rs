//! Writing assembled models to their output medium.
//!
//! [`write_lp_file`] never leaves a plausible-looking partial model behind:
//! the text goes to a temporary file in the destination directory, which is
//! renamed over the target only after a successful flush. On any error the
//! temporary file is removed when its handle drops and the target path is
//! left as it was.

use crate::error::{ModelError, ModelResult};
use crate::model::{LpModel, ModelStats};
use crate::problem::ModelSpec;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Stream `model` into `writer`, section by section.
pub fn write_lp<W: Write>(model: &LpModel, writer: W) -> io::Result<()> {
    let mut out = BufWriter::new(writer);
    write!(out, "{model}")?;
    out.flush()
}

/// Atomically write `model` to `path`.
pub fn write_lp_file(model: &LpModel, path: &Path) -> ModelResult<()> {
    let resource = |source: io::Error| ModelError::Resource {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(".splitflow-")
        .suffix(".lp.partial")
        .tempfile_in(dir)
        .map_err(resource)?;
    debug!("Writing model to staging file {}", tmp.path().display());

    write_lp(model, tmp.as_file_mut()).map_err(resource)?;
    tmp.as_file().sync_all().map_err(resource)?;
    tmp.persist(path).map_err(|e| resource(e.error))?;

    info!("Wrote LP model to {}", path.display());
    Ok(())
}

/// Build the model for `spec` and write it to `path`.
///
/// Inputs are validated before the output file is touched, so a rejected
/// spec produces no artifact.
pub fn generate_lp_file(spec: &ModelSpec, path: &Path) -> ModelResult<ModelStats> {
    let model = LpModel::build(spec)?;
    write_lp_file(&model, path)?;
    Ok(model.stats())
}
