//! Configuration sections shared by project and global config files.

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Log levels accepted by `[logging] level` and `ARK_LOG`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Collection tuning (`[collections]`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct CollectionsSettings {
    /// Slots allocated by a freshly constructed container (default: 16)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_capacity: Option<usize>,

    /// Load factor above which hash containers rehash (default: 0.75)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_load_factor: Option<f64>,
}

/// Logging preferences (`[logging]`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct LoggingSettings {
    /// Minimum level ("trace", "debug", "info", "warn", "error")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl CollectionsSettings {
    /// Validate tuning values
    pub fn validate(&self, section: &str) -> ConfigResult<()> {
        if let Some(capacity) = self.initial_capacity {
            if capacity == 0 {
                return Err(ConfigError::InvalidValue {
                    field: format!("{}.initial_capacity", section),
                    reason: "must be at least 1".to_string(),
                });
            }
        }
        if let Some(load) = self.max_load_factor {
            validate_load_factor(&format!("{}.max_load_factor", section), load)?;
        }
        Ok(())
    }

    /// Merge another section into this one.
    /// Other section takes precedence for non-None values
    pub fn merge(&mut self, other: &CollectionsSettings) {
        if other.initial_capacity.is_some() {
            self.initial_capacity = other.initial_capacity;
        }
        if other.max_load_factor.is_some() {
            self.max_load_factor = other.max_load_factor;
        }
    }
}

impl LoggingSettings {
    /// Validate the log level
    pub fn validate(&self, section: &str) -> ConfigResult<()> {
        if let Some(level) = &self.level {
            validate_log_level(&format!("{}.level", section), level)?;
        }
        Ok(())
    }

    /// Merge another section into this one.
    /// Other section takes precedence for non-None values
    pub fn merge(&mut self, other: &LoggingSettings) {
        if other.level.is_some() {
            self.level = other.level.clone();
        }
    }
}

/// Smallest accepted `max_load_factor`
pub const MIN_LOAD_FACTOR: f64 = 0.1;

/// Load factor must be below 1, otherwise a table can fill up, and at least
/// `MIN_LOAD_FACTOR`, otherwise growth runs away
pub(crate) fn validate_load_factor(field: &str, value: f64) -> ConfigResult<()> {
    if !(MIN_LOAD_FACTOR..1.0).contains(&value) {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!(
                "must be at least {} and below 1, got {}",
                MIN_LOAD_FACTOR, value
            ),
        });
    }
    Ok(())
}

pub(crate) fn validate_log_level(field: &str, value: &str) -> ConfigResult<()> {
    if !LOG_LEVELS.contains(&value.to_lowercase().as_str()) {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!(
                "must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                value
            ),
        });
    }
    Ok(())
}
