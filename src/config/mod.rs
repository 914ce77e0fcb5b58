pub mod env;

pub use env::{DEVELOPMENT, ENVIRONMENT_VAR, EnvLookup, ProcessEnv, infer_development};

use crate::domain::{LoggerError, Severity};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// Options accepted when building a logger.
///
/// Every field is optional; anything left unset falls back to its default when
/// the options are resolved into a [`LoggerConfig`]. Field names match the
/// keys used in config files (`isDevelopment`, `serviceName`, `minLevel`,
/// `context`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoggerOptions {
    /// Overrides the environment-based development mode inference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_development: Option<bool>,

    /// Tag prefixed into every header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,

    /// Records below this severity are dropped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_level: Option<Severity>,

    /// Base fields merged into every record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_development(mut self, is_development: bool) -> Self {
        self.is_development = Some(is_development);
        self
    }

    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = Some(service_name.into());
        self
    }

    pub fn with_min_level(mut self, min_level: Severity) -> Self {
        self.min_level = Some(min_level);
        self
    }

    pub fn with_context(mut self, context: Map<String, Value>) -> Self {
        self.context = Some(context);
        self
    }

    /// Adds one base context field, creating the mapping if needed.
    pub fn with_context_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self, LoggerError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoggerError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Layers `other` over `self`: fields set in `other` win.
    pub fn merge(mut self, other: LoggerOptions) -> Self {
        if other.is_development.is_some() {
            self.is_development = other.is_development;
        }
        if other.service_name.is_some() {
            self.service_name = other.service_name;
        }
        if other.min_level.is_some() {
            self.min_level = other.min_level;
        }
        if other.context.is_some() {
            self.context = other.context;
        }
        self
    }
}

/// Resolved, immutable logger configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggerConfig {
    pub development_mode: bool,
    pub service_name: Option<String>,
    pub minimum_severity: Severity,
    pub base_context: Option<Map<String, Value>>,
}

impl LoggerConfig {
    /// Fills every unset option with its default. The environment is only
    /// consulted when `is_development` was not supplied.
    pub fn resolve(options: LoggerOptions, env: &dyn EnvLookup) -> Self {
        let development_mode = options
            .is_development
            .unwrap_or_else(|| infer_development(env));

        Self {
            development_mode,
            service_name: options.service_name,
            minimum_severity: options.min_level.unwrap_or(Severity::Debug),
            base_context: options.context,
        }
    }
}
