//! Search configuration.

use crate::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Tuning knobs for the minimax search.
///
/// None of these change which move the search returns or its score; they
/// only affect how much of the tree is explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Stop examining siblings once the side to move has found a win.
    early_cutoff: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { early_cutoff: true }
    }
}

impl SearchConfig {
    /// Creates a configuration.
    pub fn new(early_cutoff: bool) -> Self {
        Self { early_cutoff }
    }

    /// Returns a copy with the early cutoff toggled.
    pub fn with_early_cutoff(self, early_cutoff: bool) -> Self {
        Self { early_cutoff }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading search config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(early_cutoff = config.early_cutoff, "Search config loaded");
        Ok(config)
    }
}
