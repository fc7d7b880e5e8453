//! Configuration for the splitflow CLI.
//!
//! Loaded from `<config_dir>/splitflow/config.toml` unless `--config` points
//! elsewhere. A missing file yields the defaults; command-line flags always
//! win over file values.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use splitflow_core::{NamingScheme, DEFAULT_SPLITS};
use splitflow_solver::SolverId;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SplitflowConfig {
    /// Model generation defaults
    #[serde(default)]
    pub model: ModelConfig,
    /// External solver configuration
    #[serde(default)]
    pub solver: SolverConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelConfig {
    /// Active transit paths per demand pair
    #[serde(default = "default_splits")]
    pub splits: u32,
    /// Variable naming scheme
    #[serde(default)]
    pub naming: NamingScheme,
    /// LP file written by `generate` and `solve`
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            splits: default_splits(),
            naming: NamingScheme::default(),
            output: default_output(),
        }
    }
}

fn default_splits() -> u32 {
    DEFAULT_SPLITS
}

fn default_output() -> PathBuf {
    PathBuf::from("flow.lp")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SolverConfig {
    /// Solver used by `solve`
    #[serde(default)]
    pub name: SolverId,
    /// Explicit binary path; searched for when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// File receiving the solver's stdout
    #[serde(default = "default_result")]
    pub result: PathBuf,
    /// Solver timeout in seconds (0 = no timeout)
    #[serde(default)]
    pub timeout_seconds: u64,
    /// Extra arguments appended to the solver command line
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            name: SolverId::default(),
            path: None,
            result: default_result(),
            timeout_seconds: 0,
            args: Vec::new(),
        }
    }
}

fn default_result() -> PathBuf {
    PathBuf::from("flow_sol.txt")
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl LoggingConfig {
    pub fn tracing_level(&self) -> Result<tracing::Level> {
        self.level
            .parse()
            .map_err(|_| anyhow!("invalid log level `{}` in config", self.level))
    }
}

/// Default location: `<config_dir>/splitflow/config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    dirs::config_dir()
        .ok_or_else(|| anyhow!("Cannot determine configuration directory"))
        .map(|dir| dir.join("splitflow").join("config.toml"))
}

/// Load configuration from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<SplitflowConfig> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Ok(path) => path,
            Err(_) => return Ok(SplitflowConfig::default()),
        },
    };

    if !config_path.exists() {
        return Ok(SplitflowConfig::default());
    }

    let contents = std::fs::read_to_string(&config_path)
        .with_context(|| format!("reading config {}", config_path.display()))?;
    let config: SplitflowConfig = toml::from_str(&contents)
        .with_context(|| format!("parsing config {}", config_path.display()))?;
    Ok(config)
}
