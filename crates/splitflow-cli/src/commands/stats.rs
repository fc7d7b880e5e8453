use std::io::{self, Write};

use anyhow::Result;
use splitflow_core::{LpModel, ModelStats};
use tabwriter::TabWriter;

use splitflow_cli::{
    cli::{ModelArgs, OutputFormat},
    config::SplitflowConfig,
};

use super::model_spec;

pub fn handle(model: &ModelArgs, format: OutputFormat, config: &SplitflowConfig) -> Result<()> {
    let spec = model_spec(model, config)?;
    let stats = LpModel::build(&spec)?.stats();
    match format {
        OutputFormat::Plain => print_table(&stats),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
            Ok(())
        }
    }
}

fn print_table(stats: &ModelStats) -> Result<()> {
    let mut writer = TabWriter::new(io::stdout()).padding(2);
    writeln!(writer, "FAMILY\tROWS")?;
    writeln!(writer, "demand\t{}", stats.demand)?;
    writeln!(writer, "capacity (source-transit)\t{}", stats.source_transit)?;
    writeln!(writer, "capacity (transit-dest)\t{}", stats.transit_dest)?;
    writeln!(writer, "split limit\t{}", stats.split_limit)?;
    writeln!(writer, "half flow\t{}", stats.half_flow)?;
    writeln!(writer, "auxiliary\t{}", stats.auxiliary)?;
    writeln!(writer, "total constraints\t{}", stats.constraints())?;
    writeln!(writer, "bounds\t{}", stats.bounds)?;
    writeln!(writer, "binaries\t{}", stats.binaries)?;
    writer.flush()?;
    Ok(())
}
