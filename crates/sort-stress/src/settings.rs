//! Stress test settings

use anyhow::{ensure, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Stress test configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StressConfig {
    /// Array sizes to test, in order
    pub sizes: Vec<usize>,
    /// Timed runs per size
    pub iterations: usize,
    /// Smallest random value (inclusive)
    pub min_value: i32,
    /// Largest random value (inclusive)
    pub max_value: i32,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            sizes: vec![1_000_000, 2_000_000, 3_000_000, 4_000_000, 40_000_000],
            iterations: 3,
            min_value: 0,
            max_value: 1000,
        }
    }
}

impl StressConfig {
    /// Environment variable prefix (`SORT_STRESS_ITERATIONS=...`)
    pub const ENV_PREFIX: &'static str = "SORT_STRESS";

    /// Quick config for smoke runs
    pub fn smoke() -> Self {
        Self {
            sizes: vec![10, 1_000, 10_000],
            iterations: 2,
            ..Default::default()
        }
    }

    /// Load configuration from defaults, an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let builder = builder.add_source(
            Environment::with_prefix(Self::ENV_PREFIX)
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("sizes"),
        );

        let config = Self::from_builder(builder)?;
        info!("Loaded stress config: {:?}", config);
        Ok(config)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured values are usable
    pub fn validate(&self) -> Result<()> {
        ensure!(self.iterations > 0, "iterations must be greater than zero");
        ensure!(
            self.min_value <= self.max_value,
            "min_value {} exceeds max_value {}",
            self.min_value,
            self.max_value
        );
        Ok(())
    }
}
