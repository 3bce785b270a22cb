//! Error types for primelist
//!
//! All modules use `PrimeListResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for primelist operations
pub type PrimeListResult<T> = Result<T, PrimeListError>;

/// All errors that can occur in primelist
#[derive(Error, Debug)]
pub enum PrimeListError {
    // Prime list errors
    #[error("Invalid argument {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("Index out of range: {index} (list holds {len} primes)")]
    IndexOutOfRange { index: String, len: usize },

    #[error("Integer overflow searching for the next prime after {after}")]
    Overflow { after: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl PrimeListError {
    /// Create an invalid argument error
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { name: "count", .. } => {
                Some("Ask for at least one prime, e.g.: primelist first 10")
            }
            Self::InvalidArgument { name: "bound", .. } => {
                Some("Use a bound of at least 2 that fits under check.sieve_limit")
            }
            Self::InvalidArgument { name: "capacity", .. } => {
                Some("Use a capacity of 1 or more")
            }
            Self::Overflow { .. } => Some("The next prime is larger than the integer width in use"),
            Self::ConfigInvalid { .. } => Some("Run: primelist config init --force"),
            _ => None,
        }
    }
}
