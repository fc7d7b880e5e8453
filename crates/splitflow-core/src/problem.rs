//! Problem definition: network dimensions, demand and model parameters.

use crate::error::{ModelError, ModelResult};
use crate::index::IndexSpace;
use crate::naming::NamingScheme;
use serde::{Deserialize, Serialize};

/// Default number of transit paths each demand is split across.
pub const DEFAULT_SPLITS: u32 = 2;

/// Node counts of the three network layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub sources: u32,
    pub transits: u32,
    pub dests: u32,
}

impl Dimensions {
    /// Create dimensions, rejecting empty layers.
    pub fn new(sources: u32, transits: u32, dests: u32) -> ModelResult<Self> {
        let dims = Self {
            sources,
            transits,
            dests,
        };
        dims.validate()?;
        Ok(dims)
    }

    fn validate(&self) -> ModelResult<()> {
        for (axis, value) in self.axes() {
            if value == 0 {
                return Err(ModelError::input(format!(
                    "{axis} count must be a positive integer"
                )));
            }
        }
        Ok(())
    }

    /// `(axis name, count)` for each layer.
    pub fn axes(&self) -> [(&'static str, u32); 3] {
        [
            ("source", self.sources),
            ("transit", self.transits),
            ("destination", self.dests),
        ]
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.sources, self.transits, self.dests)
    }
}

/// Demand volume between each source and destination.
///
/// Lookups are 1-based: `demand(i, j)` is the volume from source `i` to
/// destination `j`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DemandMatrix {
    /// `demand(i, j) = i + j`. Placeholder traffic with no physical meaning.
    #[default]
    IndexSum,
    /// Same volume for every pair.
    Uniform(f64),
    /// Explicit table, one row per source and one column per destination.
    Table(Vec<Vec<f64>>),
}

impl DemandMatrix {
    pub fn index_sum() -> Self {
        DemandMatrix::IndexSum
    }

    pub fn uniform(volume: f64) -> ModelResult<Self> {
        check_volume(volume, 1, 1)?;
        Ok(DemandMatrix::Uniform(volume))
    }

    /// Build a table from rows of per-destination volumes.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> ModelResult<Self> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if rows.is_empty() || width == 0 {
            return Err(ModelError::input("demand table is empty"));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ModelError::input(format!(
                    "demand row {} has {} columns, expected {}",
                    i + 1,
                    row.len(),
                    width
                )));
            }
            for (j, &volume) in row.iter().enumerate() {
                check_volume(volume, i + 1, j + 1)?;
            }
        }
        Ok(DemandMatrix::Table(rows))
    }

    /// Tabulate `f(i, j)` over the source/destination grid of `dims`.
    pub fn from_fn(dims: Dimensions, f: impl Fn(u32, u32) -> f64) -> ModelResult<Self> {
        let rows = (1..=dims.sources)
            .map(|i| (1..=dims.dests).map(|j| f(i, j)).collect())
            .collect();
        Self::from_rows(rows)
    }

    /// Volume for the pair `(source, dest)`.
    ///
    /// Panics on a table that [`ModelSpec::validate`] would reject.
    pub fn demand(&self, source: u32, dest: u32) -> f64 {
        match self {
            DemandMatrix::IndexSum => f64::from(source + dest),
            DemandMatrix::Uniform(volume) => *volume,
            DemandMatrix::Table(rows) => rows[source as usize - 1][dest as usize - 1],
        }
    }

    /// Shape and volume checks against `dims`. Variants built directly skip
    /// the constructors, so every cell is re-checked here.
    fn check(&self, dims: &Dimensions) -> ModelResult<()> {
        match self {
            DemandMatrix::IndexSum => Ok(()),
            DemandMatrix::Uniform(volume) => check_volume(*volume, 1, 1),
            DemandMatrix::Table(rows) => {
                if rows.len() != dims.sources as usize {
                    return Err(ModelError::input(format!(
                        "demand table has {} rows, network has {} sources",
                        rows.len(),
                        dims.sources
                    )));
                }
                for (i, row) in rows.iter().enumerate() {
                    if row.len() != dims.dests as usize {
                        return Err(ModelError::input(format!(
                            "demand row {} has {} columns, network has {} destinations",
                            i + 1,
                            row.len(),
                            dims.dests
                        )));
                    }
                    for (j, &volume) in row.iter().enumerate() {
                        check_volume(volume, i + 1, j + 1)?;
                    }
                }
                Ok(())
            }
        }
    }
}

fn check_volume(volume: f64, source: usize, dest: usize) -> ModelResult<()> {
    if !volume.is_finite() || volume < 0.0 {
        return Err(ModelError::input(format!(
            "demand({source},{dest}) = {volume} must be a finite non-negative number"
        )));
    }
    Ok(())
}

/// Everything needed to generate one model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSpec {
    pub dims: Dimensions,
    /// Number of active transit paths per demand pair.
    pub splits: u32,
    pub demand: DemandMatrix,
    pub naming: NamingScheme,
}

impl ModelSpec {
    /// Spec with legacy defaults: two splits, `i + j` demand, compact names.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            splits: DEFAULT_SPLITS,
            demand: DemandMatrix::default(),
            naming: NamingScheme::default(),
        }
    }

    pub fn with_splits(mut self, splits: u32) -> Self {
        self.splits = splits;
        self
    }

    pub fn with_demand(mut self, demand: DemandMatrix) -> Self {
        self.demand = demand;
        self
    }

    pub fn with_naming(mut self, naming: NamingScheme) -> Self {
        self.naming = naming;
        self
    }

    pub fn index_space(&self) -> IndexSpace {
        IndexSpace::new(self.dims)
    }

    /// More active paths requested than there are transit nodes. The model is
    /// still well-formed but infeasible.
    pub fn splits_exceed_transits(&self) -> bool {
        self.splits > self.dims.transits
    }

    /// Check every input before any row is generated.
    pub fn validate(&self) -> ModelResult<()> {
        self.dims.validate()?;
        if self.splits == 0 {
            return Err(ModelError::input("split count must be a positive integer"));
        }
        self.demand.check(&self.dims)?;
        for (axis, count) in self.dims.axes() {
            self.naming.check_index(axis, count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimension_is_input_error() {
        let err = Dimensions::new(2, 0, 2).unwrap_err();
        assert!(matches!(err, ModelError::Input(_)));
        assert!(err.to_string().contains("transit"));
    }

    #[test]
    fn test_index_sum_demand() {
        let demand = DemandMatrix::index_sum();
        assert_eq!(demand.demand(1, 1), 2.0);
        assert_eq!(demand.demand(3, 4), 7.0);
    }

    #[test]
    fn test_table_rejects_ragged_rows() {
        let err = DemandMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_table_rejects_negative_volume() {
        assert!(DemandMatrix::from_rows(vec![vec![1.0, -2.0]]).is_err());
        assert!(DemandMatrix::uniform(f64::NAN).is_err());
    }

    #[test]
    fn test_from_fn_tabulates() {
        let dims = Dimensions::new(2, 1, 3).unwrap();
        let demand = DemandMatrix::from_fn(dims, |i, j| f64::from(10 * i + j)).unwrap();
        assert_eq!(demand.demand(2, 3), 23.0);
        assert_eq!(demand.demand(1, 1), 11.0);
    }

    #[test]
    fn test_validate_splits() {
        let dims = Dimensions::new(2, 2, 2).unwrap();
        assert!(ModelSpec::new(dims).validate().is_ok());
        assert!(ModelSpec::new(dims).with_splits(0).validate().is_err());

        let wide = ModelSpec::new(dims).with_splits(3);
        assert!(wide.validate().is_ok());
        assert!(wide.splits_exceed_transits());
        assert!(!ModelSpec::new(dims).splits_exceed_transits());
    }

    #[test]
    fn test_validate_table_shape() {
        let dims = Dimensions::new(2, 2, 3).unwrap();
        let demand = DemandMatrix::from_rows(vec![vec![2.0; 2]; 2]).unwrap();
        let err = ModelSpec::new(dims).with_demand(demand).validate().unwrap_err();
        assert!(err.to_string().contains("network has 3 destinations"));
    }

    #[test]
    fn test_validate_rechecks_direct_variants() {
        let dims = Dimensions::new(1, 1, 1).unwrap();
        let nan = ModelSpec::new(dims).with_demand(DemandMatrix::Uniform(f64::NAN));
        assert!(matches!(nan.validate(), Err(ModelError::Input(_))));

        let negative = ModelSpec::new(dims).with_demand(DemandMatrix::Table(vec![vec![-4.0]]));
        let err = negative.validate().unwrap_err();
        assert!(err.to_string().contains("demand(1,1) = -4"));
    }

    #[test]
    fn test_validate_rejects_ragged_table() {
        let dims = Dimensions::new(2, 1, 2).unwrap();
        let ragged = DemandMatrix::Table(vec![vec![2.0, 2.0], vec![2.0]]);
        let err = ModelSpec::new(dims).with_demand(ragged).validate().unwrap_err();
        assert!(err.to_string().contains("row 2 has 1 columns"));
    }

    #[test]
    fn test_validate_legacy_ceiling() {
        let dims = Dimensions::new(3, 10, 3).unwrap();
        let err = ModelSpec::new(dims).validate().unwrap_err();
        assert!(err.is_dimension());

        let separated = ModelSpec::new(dims).with_naming(NamingScheme::Separated);
        assert!(separated.validate().is_ok());
    }
}
