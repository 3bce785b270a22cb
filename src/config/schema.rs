//! Configuration schema for primelist
//!
//! Configuration is stored at `~/.config/primelist/config.toml`

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Prime list construction settings
    pub generation: GenerationConfig,

    /// Primality check settings
    pub check: CheckConfig,

    /// Output settings
    pub output: OutputConfig,
}

impl Config {
    /// Check values serde accepts but the commands cannot use
    pub fn validate(&self) -> Result<(), String> {
        if !matches!(self.general.log_format.as_str(), "text" | "json") {
            return Err(format!(
                "general.log_format must be \"text\" or \"json\", got \"{}\"",
                self.general.log_format
            ));
        }
        if self.generation.initial_capacity == 0 {
            return Err("generation.initial_capacity must be at least 1".to_string());
        }
        if self.check.sieve_limit < 2 {
            return Err("check.sieve_limit must be at least 2".to_string());
        }
        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Prime list construction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Slots reserved for primes before the list first grows
    pub initial_capacity: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 128,
        }
    }
}

/// Primality check settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Largest number to sieve up to; larger queries use trial division
    pub sieve_limit: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            sieve_limit: 10_000_000,
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format for listing commands
    pub format: OutputFormat,
}

/// Output format for listing commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated list
    #[default]
    Plain,
    /// Human-readable table
    Table,
    /// JSON output
    Json,
}
