//! Ark Configuration System
//!
//! Provides tuning and logging configuration for Ark collections:
//! - Project configuration (ark.toml)
//! - Global user configuration (~/.ark/config.toml)
//! - Environment variable overrides (ARK_*)
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded and merged in the following order (later overrides earlier):
//! 1. Global config (~/.ark/config.toml)
//! 2. Project config (./ark.toml)
//! 3. Environment variables (ARK_INITIAL_CAPACITY, ARK_MAX_LOAD_FACTOR, ARK_LOG)
//! 4. CLI flags
//!
//! # Example
//!
//! ```no_run
//! use ark_config::ConfigLoader;
//! use std::path::Path;
//!
//! let mut loader = ConfigLoader::new();
//! let config = loader.load_from_directory(Path::new(".")).unwrap();
//! println!("initial capacity: {:?}", config.collections().initial_capacity);
//! ```

pub mod global;
pub mod loader;
pub mod project;
pub mod settings;

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Home directory not found")]
    HomeNotFound,
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

// Re-export main types
pub use global::GlobalConfig;
pub use loader::{Config, ConfigLoader};
pub use project::ProjectConfig;
pub use settings::{CollectionsSettings, LoggingSettings};

/// Read and parse a TOML configuration file
pub(crate) fn load_toml<T>(path: &std::path::Path) -> ConfigResult<T>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound(path.to_path_buf())
        } else {
            ConfigError::IoError(e)
        }
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
        file: path.to_path_buf(),
        error: e,
    })
}
