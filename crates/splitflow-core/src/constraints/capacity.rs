//! Link-load rows. `c[i,k]` and `d[k,j]` are pure aggregates of the flow on
//! each link; no ceiling is placed on them here.

use crate::error::ModelResult;
use crate::linear::{LinearExpr, Row};
use crate::naming::VarRef;
use crate::problem::ModelSpec;

/// The two capacity families, in output order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapacityRows {
    /// `Σ_j x[i,k,j] - c[i,k] = 0`, one per `(i, k)`.
    pub source_transit: Vec<Row>,
    /// `Σ_i x[i,k,j] - d[k,j] = 0`, one per `(k, j)`.
    pub transit_dest: Vec<Row>,
}

impl CapacityRows {
    pub fn len(&self) -> usize {
        self.source_transit.len() + self.transit_dest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.source_transit.iter().chain(&self.transit_dest)
    }
}

pub fn generate(spec: &ModelSpec) -> ModelResult<CapacityRows> {
    Ok(CapacityRows {
        source_transit: source_transit(spec)?,
        transit_dest: transit_dest(spec)?,
    })
}

fn source_transit(spec: &ModelSpec) -> ModelResult<Vec<Row>> {
    let space = spec.index_space();
    space
        .source_transit()
        .map(|(i, k)| {
            let mut expr = space
                .dests()
                .map(|j| spec.naming.name(&VarRef::flow(i, k, j)))
                .collect::<ModelResult<LinearExpr>>()?;
            expr.push(-1.0, spec.naming.name(&VarRef::source_link(i, k))?);
            Ok(Row::equals(expr, 0.0))
        })
        .collect()
}

fn transit_dest(spec: &ModelSpec) -> ModelResult<Vec<Row>> {
    let space = spec.index_space();
    space
        .transit_dest()
        .map(|(k, j)| {
            let mut expr = space
                .sources()
                .map(|i| spec.naming.name(&VarRef::flow(i, k, j)))
                .collect::<ModelResult<LinearExpr>>()?;
            expr.push(-1.0, spec.naming.name(&VarRef::dest_link(k, j))?);
            Ok(Row::equals(expr, 0.0))
        })
        .collect()
}
