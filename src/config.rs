//! Configuration management

use crate::error::{LotteryError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Purchase limits and pricing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Maximum combined sets per purchase
    #[serde(default = "default_max_sets")]
    pub max_sets: u32,
    /// Price of one 10-ticket set
    #[serde(default = "default_price_per_set")]
    pub price_per_set: u64,
    /// RNG seed for reproducible runs; OS entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_sets() -> u32 {
    33
}

fn default_price_per_set() -> u64 {
    3000
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_sets: default_max_sets(),
            price_per_set: default_price_per_set(),
            seed: None,
        }
    }
}

impl Config {
    /// Load from an optional TOML file, then `LOTTERY_*` environment overrides
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("LOTTERY")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.simulation.max_sets == 0 {
            return Err(LotteryError::InvalidConfig(
                "simulation.max_sets must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
