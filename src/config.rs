//! Run configuration for the comparison harness and the CLI.
//!
//! Loaded from an optional TOML file. Every field has a default, so an empty
//! file (or no file) is a valid configuration.

use crate::error::{GuideError, Result};
use crate::fibonacci::Strategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GuideConfig {
    /// Separator used by `join` in scenarios and comparisons.
    pub delimiter: String,
    /// Fibonacci strategy when none is given on the command line.
    pub strategy: Strategy,
    /// Number of elements in generated comparison inputs.
    pub compare_size: usize,
    /// Timed repetitions per implementation; the fastest one is reported.
    pub compare_rounds: u32,
    /// Seed for generated inputs, so runs are reproducible.
    pub seed: u64,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            strategy: Strategy::Iterative,
            compare_size: 2000,
            compare_rounds: 5,
            seed: 42,
        }
    }
}

impl GuideConfig {
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| GuideError::config(path, err.to_string()))?;
        let config = Self::from_toml(&content)
            .map_err(|err| GuideError::config(path, err.message().to_string()))?;
        config.validate().map_err(|err| match err {
            GuideError::InvalidArgument { message } => GuideError::config(path, message),
            other => other,
        })?;

        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Loads `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.compare_rounds == 0 {
            return Err(GuideError::invalid_argument("compare_rounds must be at least 1"));
        }
        Ok(())
    }

    pub fn with_compare_size(mut self, size: usize) -> Self {
        self.compare_size = size;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}
