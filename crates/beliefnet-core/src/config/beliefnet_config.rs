//! Top-level beliefnet configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{InferenceConfig, ObservabilityConfig};
use crate::constants::{HIDDEN_VARIABLE_LIMIT, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`BELIEFNET_*`)
/// 2. Project config (`beliefnet.toml` in the project root)
/// 3. User config (`~/.beliefnet/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BeliefnetConfig {
    pub inference: InferenceConfig,
    pub observability: ObservabilityConfig,
}

impl BeliefnetConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok());

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &BeliefnetConfig) -> Result<(), ConfigError> {
        if let Some(max) = config.inference.max_hidden_variables {
            if max > HIDDEN_VARIABLE_LIMIT {
                return Err(ConfigError::ValidationFailed {
                    field: "inference.max_hidden_variables".to_string(),
                    message: format!("must be at most {HIDDEN_VARIABLE_LIMIT}"),
                });
            }
        }
        if let Some(ref filter) = config.observability.log_filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "observability.log_filter".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the user config path: `~/.beliefnet/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(|home| PathBuf::from(home).join(".beliefnet").join("config.toml"))
    }

    fn merge_toml_file(config: &mut BeliefnetConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: BeliefnetConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    pub fn merge(base: &mut BeliefnetConfig, other: &BeliefnetConfig) {
        let inference = &other.inference;
        if inference.max_hidden_variables.is_some() {
            base.inference.max_hidden_variables = inference.max_hidden_variables;
        }
        if inference.parallel.is_some() {
            base.inference.parallel = inference.parallel;
        }
        if inference.parallel_min_hidden.is_some() {
            base.inference.parallel_min_hidden = inference.parallel_min_hidden;
        }
        if inference.trace.is_some() {
            base.inference.trace = inference.trace;
        }

        if other.observability.log_filter.is_some() {
            base.observability.log_filter = other.observability.log_filter.clone();
        }
    }

    /// Apply `BELIEFNET_*` overrides read through `lookup`.
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides<F>(config: &mut BeliefnetConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("BELIEFNET_MAX_HIDDEN_VARIABLES").and_then(|s| s.parse().ok()) {
            config.inference.max_hidden_variables = Some(v);
        }
        if let Some(v) = lookup("BELIEFNET_PARALLEL").and_then(|s| s.parse().ok()) {
            config.inference.parallel = Some(v);
        }
        if let Some(v) = lookup("BELIEFNET_PARALLEL_MIN_HIDDEN").and_then(|s| s.parse().ok()) {
            config.inference.parallel_min_hidden = Some(v);
        }
        if let Some(v) = lookup("BELIEFNET_TRACE").and_then(|s| s.parse().ok()) {
            config.inference.trace = Some(v);
        }
    }
}
