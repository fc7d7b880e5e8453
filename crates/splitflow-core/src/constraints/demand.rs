//! Demand rows: the full volume of each source/destination pair is routed
//! across some combination of transit nodes.

use crate::error::ModelResult;
use crate::linear::{LinearExpr, Row};
use crate::naming::VarRef;
use crate::problem::ModelSpec;

/// `Σ_k x[i,k,j] = demand(i,j)` for every `(i, j)`.
pub fn generate(spec: &ModelSpec) -> ModelResult<Vec<Row>> {
    let space = spec.index_space();
    space
        .source_dest()
        .map(|(i, j)| {
            let expr = space
                .transits()
                .map(|k| spec.naming.name(&VarRef::flow(i, k, j)))
                .collect::<ModelResult<LinearExpr>>()?;
            Ok(Row::equals(expr, spec.demand.demand(i, j)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{DemandMatrix, Dimensions};

    #[test]
    fn test_single_pair() {
        let spec = ModelSpec::new(Dimensions::new(1, 1, 1).unwrap());
        let rows = generate(&spec).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].to_string(), "x111 = 2");
    }

    #[test]
    fn test_sums_over_transits() {
        let dims = Dimensions::new(2, 3, 2).unwrap();
        let demand = DemandMatrix::from_rows(vec![vec![4.0, 6.0], vec![8.0, 10.0]]).unwrap();
        let rows = generate(&ModelSpec::new(dims).with_demand(demand)).unwrap();
        let lines: Vec<String> = rows.iter().map(Row::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "x111 + x121 + x131 = 4",
                "x112 + x122 + x132 = 6",
                "x211 + x221 + x231 = 8",
                "x212 + x222 + x232 = 10",
            ]
        );
    }
}
