use clap::Parser;
use tracing::{error, warn, Level};
use tracing_subscriber::FmtSubscriber;

use splitflow_cli::{
    cli::{Cli, Commands},
    config::{load_config, SplitflowConfig},
};

mod commands;

fn main() {
    let cli = Cli::parse();

    // Config errors surface after the subscriber is up so they are logged.
    let loaded = load_config(cli.config.as_deref());
    let level = cli.log_level.unwrap_or_else(|| match &loaded {
        Ok(config) => config.logging.tracing_level().unwrap_or(Level::INFO),
        Err(_) => Level::INFO,
    });

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("warning: a tracing subscriber was already installed");
    }

    let result = loaded.and_then(|config| {
        if cli.log_level.is_none() {
            if let Err(err) = config.logging.tracing_level() {
                warn!("{err}; using {level}");
            }
        }
        run(&cli, &config)
    });

    if let Err(err) = result {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &SplitflowConfig) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate { model, out } => {
            commands::generate::handle(model, out.as_deref(), config)
        }
        Commands::Solve { model, out, solver } => {
            commands::solve::handle(model, out.as_deref(), solver, config)
        }
        Commands::Stats { model, format } => commands::stats::handle(model, *format, config),
        Commands::Solvers => commands::solvers::handle(),
        Commands::Completions { shell, out } => {
            commands::completions::handle(*shell, out.as_deref())
        }
    }
}
