//! Configuration system for BouquetForge.
//!
//! Load assembly configuration from TOML or YAML to control filler
//! randomness and runtime assertions without code changes.
//!
//! # Examples
//!
//! ```
//! use bouquetforge_config::{AssemblyConfig, EnvironmentMode};
//!
//! let config = AssemblyConfig::from_toml_str(r#"
//!     environment_mode = "reproducible"
//!     random_seed = 7
//! "#).unwrap();
//!
//! assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
//! assert_eq!(config.effective_seed(), Some(7));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use bouquetforge_config::AssemblyConfig;
//!
//! let config = AssemblyConfig::load("bouquet.toml").unwrap_or_default();
//! ```

use std::path::Path;

use bouquetforge_core::BouquetForgeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<ConfigError> for BouquetForgeError {
    fn from(err: ConfigError) -> Self {
        BouquetForgeError::Config(err.to_string())
    }
}

/// Main assembly configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AssemblyConfig {
    /// Environment mode affecting reproducibility and assertions.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Random seed for reproducible filler selection.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl AssemblyConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Returns the seed the filler RNG should use, if any.
    ///
    /// An explicit `random_seed` always wins. Reproducible modes without a
    /// seed fall back to `0`; non-reproducible mode without one seeds from the OS.
    pub fn effective_seed(&self) -> Option<u64> {
        match (self.random_seed, self.environment_mode) {
            (Some(seed), _) => Some(seed),
            (None, EnvironmentMode::NonReproducible) => None,
            (None, _) => Some(0),
        }
    }
}

/// Environment mode affecting engine behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Non-reproducible mode with minimal overhead.
    #[default]
    NonReproducible,

    /// Reproducible mode with deterministic filler draws.
    Reproducible,

    /// Reproducible mode that also checks every design cache against its
    /// pool after each flower arrival.
    FullAssert,
}

impl EnvironmentMode {
    /// Returns true if cache/pool consistency is checked after every arrival.
    pub fn is_asserted(self) -> bool {
        matches!(self, Self::FullAssert)
    }
}
