//! Formatter configuration
//!
//! Settings come from a TOML file (an explicit path, or `config.toml` in the
//! platform config directory when present) and are then overridden by
//! `TIMEUNIT_*` environment variables.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{ErrorCode, Result, TimeUnitError};
use crate::time::{PatternCache, Template, FORMAT_DEFAULT};

pub const ENV_TEMPLATE: &str = "TIMEUNIT_TEMPLATE";
pub const ENV_CACHE_SIZE: &str = "TIMEUNIT_CACHE_SIZE";
pub const ENV_LOG_LEVEL: &str = "TIMEUNIT_LOG_LEVEL";

/// Location of the user-level configuration file
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "timeunit", "timeunit")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Template used when none is given
    pub default_template: String,
    /// Number of compiled extraction patterns to keep; 0 disables caching
    pub pattern_cache_size: usize,
    /// Tracing filter directive, e.g. `debug` or `timeunit=trace`
    pub log_level: Option<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            default_template: FORMAT_DEFAULT.to_string(),
            pattern_cache_size: PatternCache::DEFAULT_CAPACITY,
            log_level: None,
        }
    }
}

impl FormatConfig {
    /// Load configuration and apply environment overrides
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.merge_env_vars()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            let code = if e.kind() == std::io::ErrorKind::NotFound {
                ErrorCode::CONFIG_NOT_FOUND
            } else {
                ErrorCode::CONFIG_GENERIC
            };
            TimeUnitError::config_with_code(code, format!("cannot read {}", path.display()))
                .with_source(e)
        })?;

        debug!("Loading configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            TimeUnitError::config_with_code(ErrorCode::CONFIG_INVALID_TOML, "invalid TOML")
                .with_source(e)
        })
    }

    /// Apply `TIMEUNIT_*` environment variables
    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn merge_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(template) = lookup(ENV_TEMPLATE) {
            self.default_template = template;
        }

        if let Some(size) = lookup(ENV_CACHE_SIZE) {
            self.pattern_cache_size = size.trim().parse().map_err(|e| {
                TimeUnitError::config_with_code(
                    ErrorCode::CONFIG_INVALID_VALUE,
                    format!("{ENV_CACHE_SIZE} must be a non-negative integer, got <{size}>"),
                )
                .with_source(e)
            })?;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = Some(level);
        }

        Ok(())
    }

    /// Check that the default template scans
    pub fn validate(&self) -> Result<()> {
        self.template().map(|_| ())
    }

    /// Scan the default template
    pub fn template(&self) -> Result<Template> {
        Template::parse(&self.default_template).map_err(|e| {
            TimeUnitError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!("invalid default_template <{}>", self.default_template),
            )
            .with_source(e)
        })
    }
}
