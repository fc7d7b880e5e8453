pub mod completions;
pub mod generate;
pub mod solve;
pub mod solvers;
pub mod stats;

use anyhow::{Context, Result};
use splitflow_cli::{cli::ModelArgs, config::SplitflowConfig, demand::load_demand_csv};
use splitflow_core::{Dimensions, ModelSpec, NamingScheme};

/// Build the model description from command-line flags, falling back to config values.
pub(crate) fn model_spec(args: &ModelArgs, config: &SplitflowConfig) -> Result<ModelSpec> {
    let dims = Dimensions::new(args.sources, args.transit, args.dests)?;
    let naming = args
        .naming
        .map(NamingScheme::from)
        .unwrap_or(config.model.naming);
    let mut spec = ModelSpec::new(dims)
        .with_splits(args.splits.unwrap_or(config.model.splits))
        .with_naming(naming);
    if let Some(path) = &args.demand {
        let demand = load_demand_csv(path)?;
        spec = spec.with_demand(demand);
    }
    spec.validate()
        .with_context(|| format!("invalid {dims} network"))?;
    Ok(spec)
}
