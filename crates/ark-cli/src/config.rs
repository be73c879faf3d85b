//! CLI configuration via environment variables
//!
//! Settings that only affect how the CLI presents output. Collection tuning
//! and log levels come from `ark-config` instead.

use std::env;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Disable colored output (ARK_NO_COLOR=1 or NO_COLOR=1)
    pub no_color: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            no_color: env::var("ARK_NO_COLOR").is_ok() || env::var("NO_COLOR").is_ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
