//! Configuration Loader
//!
//! Handles loading and merging configuration from multiple sources with proper precedence.

use crate::global::GlobalConfig;
use crate::project::{ProjectConfig, PROJECT_CONFIG_FILE};
use crate::settings::{
    validate_load_factor, validate_log_level, CollectionsSettings, LoggingSettings,
};
use crate::{ConfigError, ConfigResult};
use std::env;
use std::path::{Path, PathBuf};

/// Default log level when no source sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration loader
///
/// Loads configuration from multiple sources and merges them with proper precedence:
/// 1. Global config (~/.ark/config.toml) - lowest priority
/// 2. Project config (./ark.toml) - overrides global
/// 3. Environment variables (ARK_*) - overrides project
/// 4. CLI flags - highest priority (handled by caller)
pub struct ConfigLoader {
    /// Cached global config path
    global_config_path: Option<PathBuf>,
}

/// Merged configuration result
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Project configuration (with environment overrides applied)
    pub project: ProjectConfig,

    /// Global configuration
    pub global: GlobalConfig,

    /// Project root directory (where ark.toml was found)
    pub project_root: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new() -> Self {
        Self {
            global_config_path: None,
        }
    }

    /// Create a loader that reads global defaults from `path` instead of ~/.ark
    pub fn with_global_config_path(path: impl Into<PathBuf>) -> Self {
        Self {
            global_config_path: Some(path.into()),
        }
    }

    /// Load configuration starting from the given directory
    ///
    /// Walks up the directory tree to find ark.toml, then loads and merges
    /// global config if it exists.
    pub fn load_from_directory(&mut self, start_dir: &Path) -> ConfigResult<Config> {
        let (project_root, project_config) = self.find_project_config(start_dir)?;

        let global_config = self.load_global_config()?;

        let project_config = self.apply_env_overrides(project_config)?;

        Ok(Config {
            project: project_config,
            global: global_config,
            project_root,
        })
    }

    /// Load configuration from a specific project config file
    pub fn load_from_file(&mut self, config_path: &Path) -> ConfigResult<Config> {
        let project_config = ProjectConfig::load_from_file(config_path)?;
        let global_config = self.load_global_config()?;
        let project_config = self.apply_env_overrides(project_config)?;

        let project_root = config_path.parent().map(|p| p.to_path_buf());

        Ok(Config {
            project: project_config,
            global: global_config,
            project_root,
        })
    }

    /// Find project configuration by walking up directory tree
    ///
    /// Returns (project_root, project_config); a missing file yields the default config
    fn find_project_config(
        &self,
        start_dir: &Path,
    ) -> ConfigResult<(Option<PathBuf>, ProjectConfig)> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(PROJECT_CONFIG_FILE);

            if config_path.exists() {
                let project_config = ProjectConfig::load_from_file(&config_path)?;
                return Ok((Some(current), project_config));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Ok((None, ProjectConfig::default())),
            }
        }
    }

    /// Load global configuration (optional; a missing file or home dir means defaults)
    fn load_global_config(&mut self) -> ConfigResult<GlobalConfig> {
        if self.global_config_path.is_none() {
            match GlobalConfig::global_config_path() {
                Ok(path) => self.global_config_path = Some(path),
                Err(ConfigError::HomeNotFound) => return Ok(GlobalConfig::default()),
                Err(e) => return Err(e),
            }
        }

        match &self.global_config_path {
            Some(path) if path.exists() => GlobalConfig::load_from_file(path),
            _ => Ok(GlobalConfig::default()),
        }
    }

    /// Apply environment variable overrides to project config
    ///
    /// Recognized variables: ARK_INITIAL_CAPACITY, ARK_MAX_LOAD_FACTOR, ARK_LOG
    fn apply_env_overrides(&self, mut config: ProjectConfig) -> ConfigResult<ProjectConfig> {
        if let Ok(raw) = env::var("ARK_INITIAL_CAPACITY") {
            let capacity = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|c| *c > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    field: "ARK_INITIAL_CAPACITY".to_string(),
                    reason: format!("expected a positive integer, got '{}'", raw),
                })?;
            config.collections_mut().initial_capacity = Some(capacity);
        }

        if let Ok(raw) = env::var("ARK_MAX_LOAD_FACTOR") {
            let load = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidValue {
                    field: "ARK_MAX_LOAD_FACTOR".to_string(),
                    reason: format!("expected a number, got '{}'", raw),
                })?;
            validate_load_factor("ARK_MAX_LOAD_FACTOR", load)?;
            config.collections_mut().max_load_factor = Some(load);
        }

        if let Ok(level) = env::var("ARK_LOG") {
            validate_log_level("ARK_LOG", &level)?;
            config.logging_mut().level = Some(level.to_lowercase());
        }

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Effective collection tuning (project over global)
    ///
    /// Fields left unset everywhere stay `None`; consumers supply their own defaults.
    pub fn collections(&self) -> CollectionsSettings {
        let mut merged = self.global.collections.clone().unwrap_or_default();
        if let Some(project) = &self.project.collections {
            merged.merge(project);
        }
        merged
    }

    /// Effective logging section (project over global)
    pub fn logging(&self) -> LoggingSettings {
        let mut merged = self.global.logging.clone().unwrap_or_default();
        if let Some(project) = &self.project.logging {
            merged.merge(project);
        }
        merged
    }

    /// Effective log level (project > global > default)
    pub fn log_level(&self) -> String {
        self.logging()
            .level
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
    }

    /// Get the project root directory
    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    /// Check if this is a project (has ark.toml)
    pub fn is_project(&self) -> bool {
        self.project_root.is_some()
    }
}
