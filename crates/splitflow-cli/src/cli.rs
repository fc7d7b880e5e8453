use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum, ValueHint};
use clap_complete::Shell;
use splitflow_core::NamingScheme;
use splitflow_solver::SolverId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "splitflow",
    author,
    version,
    about = "Generate and solve split-limited min-max transshipment models",
    long_about = None
)]
pub struct Cli {
    /// Set the logging level (defaults to the config file, then "info")
    #[arg(long, global = true)]
    pub log_level: Option<tracing::Level>,

    /// Path to the configuration file
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the LP model for a network
    Generate {
        #[command(flatten)]
        model: ModelArgs,
        /// Output LP file (defaults to the config file, then flow.lp)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        out: Option<PathBuf>,
    },
    /// Write the LP model and run an external solver on it
    Solve {
        #[command(flatten)]
        model: ModelArgs,
        /// Output LP file (defaults to the config file, then flow.lp)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        out: Option<PathBuf>,
        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Print row counts for a network without writing a file
    Stats {
        #[command(flatten)]
        model: ModelArgs,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// List known solvers and whether their binaries are available
    Solvers,
    /// Generate shell completion scripts
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
        /// Write output to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Network dimensions and model parameters shared by every model command.
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Number of source nodes
    pub sources: u32,
    /// Number of transit nodes
    pub transit: u32,
    /// Number of destination nodes
    pub dests: u32,
    /// Active transit paths per demand pair (defaults to the config file, then 2)
    #[arg(long)]
    pub splits: Option<u32>,
    /// CSV demand table: one row per source, one column per destination
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub demand: Option<PathBuf>,
    /// Variable naming scheme
    #[arg(long, value_enum)]
    pub naming: Option<Naming>,
}

#[derive(Args, Debug, Clone)]
pub struct SolverArgs {
    /// Solver to run (defaults to the config file, then cplex)
    #[arg(long, value_enum)]
    pub solver: Option<SolverKind>,
    /// Explicit path to the solver binary
    #[arg(long, value_hint = ValueHint::ExecutablePath)]
    pub solver_path: Option<PathBuf>,
    /// File receiving the solver's stdout (defaults to flow_sol.txt)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub result: Option<PathBuf>,
    /// Kill the solver after this many seconds (0 = wait indefinitely)
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Naming {
    /// Digit concatenation (x123); at most 9 nodes per layer
    Legacy,
    /// Underscore-separated indices (x_1_2_3)
    Separated,
}

impl From<Naming> for NamingScheme {
    fn from(value: Naming) -> Self {
        match value {
            Naming::Legacy => NamingScheme::Legacy,
            Naming::Separated => NamingScheme::Separated,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SolverKind {
    Cplex,
    Cbc,
    Glpk,
    Highs,
}

impl From<SolverKind> for SolverId {
    fn from(value: SolverKind) -> Self {
        match value {
            SolverKind::Cplex => SolverId::Cplex,
            SolverKind::Cbc => SolverId::Cbc,
            SolverKind::Glpk => SolverId::Glpk,
            SolverKind::Highs => SolverId::Highs,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli_command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "splitflow", "generate", "3", "4", "2", "--splits", "3", "--naming", "separated",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate { model, out } => {
                assert_eq!((model.sources, model.transit, model.dests), (3, 4, 2));
                assert_eq!(model.splits, Some(3));
                assert_eq!(model.naming, Some(Naming::Separated));
                assert!(out.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_non_integer_dimension_is_rejected() {
        assert!(Cli::try_parse_from(["splitflow", "generate", "3", "x", "2"]).is_err());
        assert!(Cli::try_parse_from(["splitflow", "generate", "3", "-1", "2"]).is_err());
    }
}
