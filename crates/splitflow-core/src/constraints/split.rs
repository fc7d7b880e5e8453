//! Split-limit rows: exactly `splits` transit paths are active per pair.

use crate::error::ModelResult;
use crate::linear::{LinearExpr, Row};
use crate::naming::VarRef;
use crate::problem::ModelSpec;

/// `Σ_k u[i,k,j] = splits` for every `(i, j)`.
pub fn generate(spec: &ModelSpec) -> ModelResult<Vec<Row>> {
    let space = spec.index_space();
    let splits = f64::from(spec.splits);
    space
        .source_dest()
        .map(|(i, j)| {
            let expr = space
                .transits()
                .map(|k| spec.naming.name(&VarRef::select(i, k, j)))
                .collect::<ModelResult<LinearExpr>>()?;
            Ok(Row::equals(expr, splits))
        })
        .collect()
}
