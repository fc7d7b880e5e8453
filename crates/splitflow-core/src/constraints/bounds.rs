//! `Bounds` and `BIN` section contents.

use crate::error::ModelResult;
use crate::linear::{Bound, BoundStyle};
use crate::naming::VarRef;
use crate::problem::ModelSpec;

/// Declarative (non-algebraic) part of the model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    /// `c >= 0`, `d >= 0`, `0 <= x`, `0 <= r`, in that order.
    pub bounds: Vec<Bound>,
    /// Every `u[i,k,j]`.
    pub binaries: Vec<String>,
}

pub fn generate(spec: &ModelSpec) -> ModelResult<Declarations> {
    Ok(Declarations {
        bounds: bounds(spec)?,
        binaries: binaries(spec)?,
    })
}

fn bounds(spec: &ModelSpec) -> ModelResult<Vec<Bound>> {
    let space = spec.index_space();
    let nonneg = |var: VarRef, style: BoundStyle| -> ModelResult<Bound> {
        Ok(Bound {
            var: spec.naming.name(&var)?,
            lower: 0.0,
            style,
        })
    };

    let mut out = Vec::with_capacity(
        space.source_transit().count() + space.transit_dest().count() + space.path_count() + 1,
    );
    for (i, k) in space.source_transit() {
        out.push(nonneg(VarRef::source_link(i, k), BoundStyle::Trailing)?);
    }
    for (k, j) in space.transit_dest() {
        out.push(nonneg(VarRef::dest_link(k, j), BoundStyle::Trailing)?);
    }
    for (i, k, j) in space.paths() {
        out.push(nonneg(VarRef::flow(i, k, j), BoundStyle::Leading)?);
    }
    out.push(nonneg(VarRef::bottleneck(), BoundStyle::Leading)?);
    Ok(out)
}

fn binaries(spec: &ModelSpec) -> ModelResult<Vec<String>> {
    spec.index_space()
        .paths()
        .map(|(i, k, j)| spec.naming.name(&VarRef::select(i, k, j)))
        .collect()
}
