//! CLI configuration loading
//!
//! Loads simulation defaults from a TOML file. A missing file yields the
//! built-in defaults; command-line flags override anything set here.

use serde::Deserialize;
use std::path::Path;

use walk_core::absorbing::DEFAULT_MAX_STEPS;
use walk_core::hitting::DEFAULT_TRIALS;
use walk_core::walk::DEFAULT_BIAS;

use crate::{CliError, Result};

/// CLI configuration
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Simulation defaults
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// General CLI settings
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,

    /// Output format (table, json)
    pub format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: "table".to_string(),
        }
    }
}

/// Simulation defaults
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Seed for the random source; entropy when absent
    pub seed: Option<u64>,

    /// Trials for msd and hitting
    pub n_trials: usize,

    /// Step budget for absorbing walks
    pub max_steps: usize,

    /// Probability of a +1 step
    pub bias: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: None,
            n_trials: DEFAULT_TRIALS,
            max_steps: DEFAULT_MAX_STEPS,
            bias: DEFAULT_BIAS,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CliError::Parse(format!("Failed to parse config: {}", e)))
    }
}
