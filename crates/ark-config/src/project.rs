//! Project Configuration (ark.toml)
//!
//! Handles project-level configuration stored in `ark.toml` at the project root.

use crate::settings::{CollectionsSettings, LoggingSettings};
use crate::{load_toml, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name searched for when walking up from a directory
pub const PROJECT_CONFIG_FILE: &str = "ark.toml";

/// Project configuration from ark.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Collection tuning
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<CollectionsSettings>,

    /// Logging preferences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingSettings>,
}

impl ProjectConfig {
    /// Load project configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let config: Self = load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse project configuration from a TOML string
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Validate the project configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(collections) = &self.collections {
            collections.validate("collections")?;
        }
        if let Some(logging) = &self.logging {
            logging.validate("logging")?;
        }
        Ok(())
    }

    /// Mutable access to the collections section, creating it if absent
    pub fn collections_mut(&mut self) -> &mut CollectionsSettings {
        self.collections.get_or_insert_with(Default::default)
    }

    /// Mutable access to the logging section, creating it if absent
    pub fn logging_mut(&mut self) -> &mut LoggingSettings {
        self.logging.get_or_insert_with(Default::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = ProjectConfig::parse("").unwrap();
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[collections]
initial_capacity = 32
max_load_factor = 0.5

[logging]
level = "debug"
"#;
        let config = ProjectConfig::parse(toml).unwrap();
        let collections = config.collections.as_ref().unwrap();
        assert_eq!(collections.initial_capacity, Some(32));
        assert_eq!(collections.max_load_factor, Some(0.5));
        assert_eq!(config.logging.unwrap().level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let toml = r#"
[collections]
growth = 3
"#;
        assert!(ProjectConfig::parse(toml).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_load_factor() {
        let toml = r#"
[collections]
max_load_factor = 1.5
"#;
        let config = ProjectConfig::parse(toml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_collections_mut_creates_section() {
        let mut config = ProjectConfig::default();
        config.collections_mut().initial_capacity = Some(8);
        assert_eq!(config.collections.unwrap().initial_capacity, Some(8));
    }
}
