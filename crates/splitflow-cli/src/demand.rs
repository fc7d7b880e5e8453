//! Demand tables from CSV.
//!
//! One record per source, one field per destination. Lines starting with `#`
//! are comments; there is no header row.

use anyhow::{Context, Result};
use splitflow_core::DemandMatrix;
use std::io::Read;
use std::path::Path;

pub fn load_demand_csv(path: &Path) -> Result<DemandMatrix> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening demand table {}", path.display()))?;
    read_demand_csv(file).with_context(|| format!("reading demand table {}", path.display()))
}

pub fn read_demand_csv<R: Read>(reader: R) -> Result<DemandMatrix> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (line, record) in csv.records().enumerate() {
        let record = record?;
        let row = record
            .iter()
            .enumerate()
            .map(|(col, field)| {
                field.parse::<f64>().with_context(|| {
                    format!("row {}, column {}: `{field}` is not a number", line + 1, col + 1)
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }
    Ok(DemandMatrix::from_rows(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_table() {
        let demand = read_demand_csv("# 2 sources x 3 dests\n2, 4, 6\n8,10,12\n".as_bytes()).unwrap();
        assert_eq!(demand.demand(1, 3), 6.0);
        assert_eq!(demand.demand(2, 1), 8.0);
    }

    #[test]
    fn test_rejects_text_field() {
        let err = read_demand_csv("2,four\n".as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("column 2"));
    }

    #[test]
    fn test_rejects_ragged_table() {
        assert!(read_demand_csv("1,2\n3\n".as_bytes()).is_err());
    }
}
