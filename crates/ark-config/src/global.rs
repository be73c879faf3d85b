//! Global Configuration (~/.ark/config.toml)
//!
//! Handles user-level defaults stored in `~/.ark/config.toml`.

use crate::settings::{CollectionsSettings, LoggingSettings};
use crate::{load_toml, ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Global user configuration from ~/.ark/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default collection tuning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<CollectionsSettings>,

    /// Default logging preferences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingSettings>,
}

impl GlobalConfig {
    /// Load global configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let config: Self = load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the global configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(collections) = &self.collections {
            collections.validate("global.collections")?;
        }
        if let Some(logging) = &self.logging {
            logging.validate("global.logging")?;
        }
        Ok(())
    }

    /// Get the global config file path (~/.ark/config.toml)
    pub fn global_config_path() -> ConfigResult<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
        Ok(home.join(".ark").join("config.toml"))
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_global_config() {
        let toml = r#"
[logging]
level = "info"
"#;
        let config: GlobalConfig = toml::from_str(toml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.logging.unwrap().level.as_deref(), Some("info"));
        assert!(config.collections.is_none());
    }

    #[test]
    fn test_invalid_level_rejected() {
        let toml = r#"
[logging]
level = "chatty"
"#;
        let config: GlobalConfig = toml::from_str(toml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("global.logging.level"));
    }

    #[test]
    fn test_global_config_path_ends_with_ark_dir() {
        if let Ok(path) = GlobalConfig::global_config_path() {
            assert!(path.ends_with(".ark/config.toml"));
        }
    }
}
