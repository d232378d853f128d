//! Configuration loading and merging.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::shell::Format;
use crate::verbs::VerbOptions;

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = ".argsplit.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("verbs.{field} must not be empty")]
    EmptyPrefix { field: &'static str },
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Convention used when a request does not name one.
    pub format: Option<Format>,

    /// Verb lookup settings.
    pub verbs: VerbConfig,
}

/// Verb lookup configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct VerbConfig {
    pub short_prefix: Option<String>,
    pub long_prefix: Option<String>,
    pub case_sensitive: Option<bool>,
}

/// Validated configuration with defaults applied.
#[derive(Debug, Clone)]
pub struct CompiledConfig {
    /// The raw config.
    pub raw: Config,
    /// Default format for requests.
    pub format: Format,
    /// Verb lookup options.
    pub verbs: VerbOptions,
}

impl Config {
    /// Load configuration, merging user and project configs.
    pub fn load(cwd: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(user_config) = Self::load_user_config()? {
            config = user_config;
        }

        if let Some(cwd) = cwd {
            if let Some(project_config) = Self::load_project_config(cwd)? {
                config.merge(project_config);
            }
        }

        Ok(config)
    }

    /// Parse a config from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn load_user_config() -> Result<Option<Self>, ConfigError> {
        if let Some(path) = Self::user_config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                log::debug!("loaded user config from {}", path.display());
                return Ok(Some(Self::parse(&content)?));
            }
        }
        Ok(None)
    }

    fn load_project_config(cwd: &Path) -> Result<Option<Self>, ConfigError> {
        let path = cwd.join(PROJECT_CONFIG_FILE);
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            log::debug!("loaded project config from {}", path.display());
            return Ok(Some(Self::parse(&content)?));
        }
        Ok(None)
    }

    /// Get user config path.
    /// Respects ARGSPLIT_CONFIG env var for testing.
    fn user_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("ARGSPLIT_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|h| h.join(PROJECT_CONFIG_FILE))
    }

    /// Merge another config into this one (other takes precedence where set).
    fn merge(&mut self, other: Config) {
        if other.format.is_some() {
            self.format = other.format;
        }
        if other.verbs.short_prefix.is_some() {
            self.verbs.short_prefix = other.verbs.short_prefix;
        }
        if other.verbs.long_prefix.is_some() {
            self.verbs.long_prefix = other.verbs.long_prefix;
        }
        if other.verbs.case_sensitive.is_some() {
            self.verbs.case_sensitive = other.verbs.case_sensitive;
        }
    }

    /// Apply defaults and validate.
    pub fn compile(self) -> Result<CompiledConfig, ConfigError> {
        let defaults = VerbOptions::default();

        let short_prefix = match &self.verbs.short_prefix {
            Some(p) if p.is_empty() => {
                return Err(ConfigError::EmptyPrefix {
                    field: "short_prefix",
                });
            }
            Some(p) => p.clone(),
            None => defaults.short_prefix,
        };
        let long_prefix = match &self.verbs.long_prefix {
            Some(p) if p.is_empty() => {
                return Err(ConfigError::EmptyPrefix {
                    field: "long_prefix",
                });
            }
            Some(p) => p.clone(),
            None => defaults.long_prefix,
        };
        let case_sensitive = self.verbs.case_sensitive.unwrap_or(defaults.case_sensitive);

        Ok(CompiledConfig {
            format: self.format.unwrap_or_default(),
            verbs: VerbOptions {
                short_prefix,
                long_prefix,
                case_sensitive,
            },
            raw: self,
        })
    }
}
