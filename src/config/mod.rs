//! Loading and saving the primelist TOML config
//!
//! The file is optional. A missing file means defaults; a file that parses
//! but holds unusable values is rejected the same way as malformed TOML.

pub mod schema;

pub use schema::{Config, OutputFormat};

use crate::error::{PrimeListError, PrimeListResult};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Reads and writes the config file at one resolved path
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Manager for the platform config path, `<config_dir>/primelist/config.toml`
    pub fn new() -> Self {
        Self::with_path(Self::default_config_path())
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Use `--config` / `PRIMELIST_CONFIG` when given, else the platform path
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        match explicit {
            Some(path) => Self::with_path(path),
            None => Self::new(),
        }
    }

    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("primelist")
            .join("config.toml")
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load and validate the config; a missing file yields defaults
    pub async fn load(&self) -> PrimeListResult<Config> {
        let content = match fs::read_to_string(&self.config_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(
                    "No config at {}, using defaults",
                    self.config_path.display()
                );
                return Ok(Config::default());
            }
            Err(e) => {
                return Err(PrimeListError::io(
                    format!("reading config from {}", self.config_path.display()),
                    e,
                ))
            }
        };

        let config: Config = toml::from_str(&content).map_err(|e| self.invalid(e.to_string()))?;
        config.validate().map_err(|reason| self.invalid(reason))?;
        Ok(config)
    }

    /// Write the config, creating parent directories as needed
    pub async fn save(&self, config: &Config) -> PrimeListResult<()> {
        config.validate().map_err(|reason| self.invalid(reason))?;

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PrimeListError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await.map_err(|e| {
            PrimeListError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    fn invalid(&self, reason: String) -> PrimeListError {
        PrimeListError::ConfigInvalid {
            path: self.config_path.clone(),
            reason,
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
