//! Bottleneck rows. With the objective `minimize r`, `r` settles on the
//! largest aggregate throughput over all transit nodes.

use crate::error::ModelResult;
use crate::linear::{LinearExpr, Row};
use crate::naming::VarRef;
use crate::problem::ModelSpec;

/// `Σ_{i,j} x[i,k,j] - r <= 0` for every transit `k`.
pub fn generate(spec: &ModelSpec) -> ModelResult<Vec<Row>> {
    let space = spec.index_space();
    let bottleneck = spec.naming.name(&VarRef::bottleneck())?;
    space
        .transits()
        .map(|k| {
            let mut expr = space
                .source_dest()
                .map(|(i, j)| spec.naming.name(&VarRef::flow(i, k, j)))
                .collect::<ModelResult<LinearExpr>>()?;
            expr.push(-1.0, bottleneck.clone());
            Ok(Row::at_most(expr, 0.0))
        })
        .collect()
}
