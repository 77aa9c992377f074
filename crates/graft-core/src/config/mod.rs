//! Configuration management for graft.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `graft.toml` file
//! 3. User config `~/.config/graft/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the canonical taxonomy is read from.
    pub taxonomy: TaxonomyConfig,

    /// Batch report configuration.
    pub report: ReportConfig,

    /// Logging configuration.
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./graft.toml` (project local)
    /// 2. `~/.config/graft/config.toml` (user config)
    /// 3. Falls back to defaults
    ///
    /// Environment overrides apply in every case.
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(PROJECT_CONFIG_FILE).exists() {
            return Self::from_file(PROJECT_CONFIG_FILE);
        }

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading config");
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// `~/.config/graft/config.toml`, if the platform has a config dir.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
    }

    /// Apply environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Taxonomy overrides
        if let Some(root) = var("GRAFT_ECS_ROOT") {
            self.taxonomy.root = PathBuf::from(root);
        }
        if let Some(version) = var("GRAFT_ECS_VERSION") {
            self.taxonomy.version = version;
        }
        if let Some(path) = var("GRAFT_NESTED_PATH") {
            self.taxonomy.nested_path = path;
        }

        // Log overrides
        if let Some(filter) = var("GRAFT_LOG") {
            self.log.filter = filter;
        }
    }

    /// Reject values no command can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.taxonomy.version.trim().is_empty() {
            return Err(ConfigError::Invalid("taxonomy.version is empty".to_string()));
        }
        if self.taxonomy.nested_path.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "taxonomy.nested_path is empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Taxonomy source configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// Checkout of the repository holding the taxonomy.
    pub root: PathBuf,

    /// Revision to read the taxonomy at (branch, tag or commit).
    pub version: String,

    /// Path of the nested taxonomy file inside the repository.
    pub nested_path: String,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_TAXONOMY_ROOT),
            version: DEFAULT_TAXONOMY_VERSION.to_string(),
            nested_path: DEFAULT_NESTED_PATH.to_string(),
        }
    }
}

impl TaxonomyConfig {
    /// The `<version>:<path>` object name for `git show`.
    pub fn object_name(&self) -> String {
        format!("{}:{}", self.version, self.nested_path)
    }
}

/// Batch report configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub skip_groups: bool,
    pub skip_external: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            skip_groups: DEFAULT_SKIP_GROUPS,
            skip_external: DEFAULT_SKIP_EXTERNAL,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing-subscriber` filter directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
