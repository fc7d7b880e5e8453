//! Half-flow linking rows.
//!
//! Couples the binary `u[i,k,j]` to the flow `x[i,k,j]` without slack:
//! `splits·x - demand·u = 0`. A deselected path carries nothing, a selected
//! one carries exactly `demand / splits`. Together with the demand and
//! split-limit rows this is the only feasible allocation, so no big-M term is
//! needed.

use crate::error::ModelResult;
use crate::linear::{LinearExpr, Row};
use crate::naming::VarRef;
use crate::problem::ModelSpec;

/// One row per path `(i, k, j)`.
pub fn generate(spec: &ModelSpec) -> ModelResult<Vec<Row>> {
    let splits = f64::from(spec.splits);
    spec.index_space()
        .paths()
        .map(|(i, k, j)| {
            let expr = LinearExpr::new()
                .with(splits, spec.naming.name(&VarRef::flow(i, k, j))?)
                .with(
                    -spec.demand.demand(i, j),
                    spec.naming.name(&VarRef::select(i, k, j))?,
                );
            Ok(Row::equals(expr, 0.0))
        })
        .collect()
}
