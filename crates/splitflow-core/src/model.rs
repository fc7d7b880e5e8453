//! Model assembly.
//!
//! Runs every constraint generator and lays the results out in the section
//! order of the LP grammar:
//!
//! ```text
//! Minimize / r / Subject to
//!   Demand:      S·D rows
//!   Capacity:    S·T + T·D rows
//!   (split)      S·D rows
//!   (half flow)  S·T·D rows
//!   (auxiliary)  T rows
//! Bounds
//! BIN
//! End
//! ```
//!
//! The [`fmt::Display`] impl is the single source of the byte layout; both
//! [`LpModel::render`] and the emitter go through it.

use crate::constraints::{self, CapacityRows, Declarations};
use crate::error::ModelResult;
use crate::linear::{Bound, Row};
use crate::naming::VarRef;
use crate::problem::ModelSpec;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

/// A fully assembled, immutable model.
#[derive(Debug, Clone, PartialEq)]
pub struct LpModel {
    objective: String,
    demand: Vec<Row>,
    capacity: CapacityRows,
    split: Vec<Row>,
    half_flow: Vec<Row>,
    auxiliary: Vec<Row>,
    declarations: Declarations,
}

/// Row and variable counts of an assembled model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ModelStats {
    pub demand: usize,
    pub source_transit: usize,
    pub transit_dest: usize,
    pub split_limit: usize,
    pub half_flow: usize,
    pub auxiliary: usize,
    pub bounds: usize,
    pub binaries: usize,
}

impl ModelStats {
    pub fn capacity(&self) -> usize {
        self.source_transit + self.transit_dest
    }

    /// Total algebraic rows in the `Subject to` section.
    pub fn constraints(&self) -> usize {
        self.demand + self.capacity() + self.split_limit + self.half_flow + self.auxiliary
    }
}

struct Families {
    demand: ModelResult<Vec<Row>>,
    capacity: ModelResult<CapacityRows>,
    split: ModelResult<Vec<Row>>,
    half_flow: ModelResult<Vec<Row>>,
    auxiliary: ModelResult<Vec<Row>>,
    declarations: ModelResult<Declarations>,
}

#[cfg(feature = "parallel")]
fn generate_families(spec: &ModelSpec) -> Families {
    let ((demand, capacity), ((split, half_flow), (auxiliary, declarations))) = rayon::join(
        || {
            rayon::join(
                || constraints::demand::generate(spec),
                || constraints::capacity::generate(spec),
            )
        },
        || {
            rayon::join(
                || {
                    rayon::join(
                        || constraints::split::generate(spec),
                        || constraints::half_flow::generate(spec),
                    )
                },
                || {
                    rayon::join(
                        || constraints::auxiliary::generate(spec),
                        || constraints::bounds::generate(spec),
                    )
                },
            )
        },
    );
    Families {
        demand,
        capacity,
        split,
        half_flow,
        auxiliary,
        declarations,
    }
}

#[cfg(not(feature = "parallel"))]
fn generate_families(spec: &ModelSpec) -> Families {
    Families {
        demand: constraints::demand::generate(spec),
        capacity: constraints::capacity::generate(spec),
        split: constraints::split::generate(spec),
        half_flow: constraints::half_flow::generate(spec),
        auxiliary: constraints::auxiliary::generate(spec),
        declarations: constraints::bounds::generate(spec),
    }
}

impl LpModel {
    /// Validate `spec` and generate every section.
    ///
    /// Fails before generating anything if the inputs are invalid.
    pub fn build(spec: &ModelSpec) -> ModelResult<Self> {
        spec.validate()?;
        info!(
            dims = %spec.dims,
            splits = spec.splits,
            naming = %spec.naming,
            "Generating transshipment model"
        );
        if spec.splits_exceed_transits() {
            warn!(
                splits = spec.splits,
                transits = spec.dims.transits,
                "Split count exceeds transit count; the model will be infeasible"
            );
        }

        let families = generate_families(spec);
        let model = Self {
            objective: spec.naming.name(&VarRef::bottleneck())?,
            demand: families.demand?,
            capacity: families.capacity?,
            split: families.split?,
            half_flow: families.half_flow?,
            auxiliary: families.auxiliary?,
            declarations: families.declarations?,
        };

        let stats = model.stats();
        debug!(
            demand = stats.demand,
            capacity = stats.capacity(),
            split_limit = stats.split_limit,
            half_flow = stats.half_flow,
            auxiliary = stats.auxiliary,
            "Model assembled with {} constraints",
            stats.constraints()
        );
        Ok(model)
    }

    pub fn stats(&self) -> ModelStats {
        ModelStats {
            demand: self.demand.len(),
            source_transit: self.capacity.source_transit.len(),
            transit_dest: self.capacity.transit_dest.len(),
            split_limit: self.split.len(),
            half_flow: self.half_flow.len(),
            auxiliary: self.auxiliary.len(),
            bounds: self.declarations.bounds.len(),
            binaries: self.declarations.binaries.len(),
        }
    }

    /// Name of the minimized variable.
    pub fn objective(&self) -> &str {
        &self.objective
    }

    pub fn demand_rows(&self) -> &[Row] {
        &self.demand
    }

    pub fn capacity_rows(&self) -> &CapacityRows {
        &self.capacity
    }

    pub fn split_rows(&self) -> &[Row] {
        &self.split
    }

    pub fn half_flow_rows(&self) -> &[Row] {
        &self.half_flow
    }

    pub fn auxiliary_rows(&self) -> &[Row] {
        &self.auxiliary
    }

    pub fn bounds(&self) -> &[Bound] {
        &self.declarations.bounds
    }

    pub fn binaries(&self) -> &[String] {
        &self.declarations.binaries
    }

    /// Every algebraic row, in output order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.demand
            .iter()
            .chain(self.capacity.iter())
            .chain(&self.split)
            .chain(&self.half_flow)
            .chain(&self.auxiliary)
    }

    /// The complete LP text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn write_rows<T: fmt::Display>(f: &mut fmt::Formatter<'_>, rows: &[T]) -> fmt::Result {
    for row in rows {
        writeln!(f, "{row}")?;
    }
    Ok(())
}

impl fmt::Display for LpModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Minimize")?;
        writeln!(f, "{}", self.objective)?;
        writeln!(f, "Subject to")?;

        writeln!(f)?;
        writeln!(f, "Demand:")?;
        write_rows(f, &self.demand)?;

        writeln!(f)?;
        writeln!(f, "Capacity:")?;
        write_rows(f, &self.capacity.source_transit)?;
        write_rows(f, &self.capacity.transit_dest)?;

        writeln!(f)?;
        write_rows(f, &self.split)?;

        writeln!(f)?;
        write_rows(f, &self.half_flow)?;
        write_rows(f, &self.auxiliary)?;

        writeln!(f)?;
        writeln!(f, "Bounds")?;
        write_rows(f, &self.declarations.bounds)?;

        writeln!(f)?;
        writeln!(f, "BIN")?;
        write_rows(f, &self.declarations.binaries)?;

        writeln!(f, "End")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Dimensions;

    const SINGLE_NODE: &str = "\
Minimize
r
Subject to

Demand:
x111 = 2

Capacity:
x111 - c11 = 0
x111 - d11 = 0

u111 = 2

2 x111 - 2 u111 = 0
x111 - r <= 0

Bounds
c11 >= 0
d11 >= 0
0 <= x111
0 <= r

BIN
u111
End
";

    #[test]
    fn test_single_node_text() {
        let spec = ModelSpec::new(Dimensions::new(1, 1, 1).unwrap());
        let model = LpModel::build(&spec).unwrap();
        assert_eq!(model.render(), SINGLE_NODE);
        assert_eq!(model.objective(), "r");
    }

    #[test]
    fn test_splits_change_only_split_and_half_flow_rows() {
        let dims = Dimensions::new(1, 1, 1).unwrap();
        let model = LpModel::build(&ModelSpec::new(dims).with_splits(1)).unwrap();
        let text = model.render();
        assert!(text.contains("\nu111 = 1\n"));
        assert!(text.contains("\nx111 - 2 u111 = 0\n"));
        assert!(text.contains("\nx111 = 2\n"));
    }

    #[test]
    fn test_stats() {
        let model = LpModel::build(&ModelSpec::new(Dimensions::new(2, 3, 4).unwrap())).unwrap();
        let stats = model.stats();
        assert_eq!(stats.demand, 8);
        assert_eq!(stats.capacity(), 6 + 12);
        assert_eq!(stats.split_limit, 8);
        assert_eq!(stats.half_flow, 24);
        assert_eq!(stats.auxiliary, 3);
        assert_eq!(stats.binaries, 24);
        assert_eq!(stats.constraints(), model.rows().count());
    }

    #[test]
    fn test_build_is_deterministic() {
        let spec = ModelSpec::new(Dimensions::new(3, 4, 2).unwrap());
        let a = LpModel::build(&spec).unwrap().render();
        let b = LpModel::build(&spec).unwrap().render();
        assert_eq!(a, b);
    }
}
