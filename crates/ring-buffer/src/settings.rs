//! Ring buffer settings

use crate::BufferError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Default buffer capacity
pub const DEFAULT_CAPACITY: usize = 3000;

/// Ring buffer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BufferConfig {
    /// Number of slots allocated up front
    pub capacity: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl BufferConfig {
    /// Environment variable prefix (`RING_BUFFER_CAPACITY=...`)
    pub const ENV_PREFIX: &'static str = "RING_BUFFER";

    /// Load configuration from defaults, an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self, BufferError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let builder = builder.add_source(Environment::with_prefix(Self::ENV_PREFIX).try_parsing(true));

        let config = Self::from_builder(builder)?;
        info!("Loaded ring buffer config: {:?}", config);
        Ok(config)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, BufferError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured values are usable
    pub fn validate(&self) -> Result<(), BufferError> {
        if self.capacity == 0 {
            return Err(BufferError::Config("capacity must be greater than zero".into()));
        }
        Ok(())
    }
}
