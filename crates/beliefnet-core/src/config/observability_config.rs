use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_FILTER;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive used when `BELIEFNET_LOG` is unset. Default: "beliefnet=info".
    pub log_filter: Option<String>,
}

impl ObservabilityConfig {
    pub fn effective_log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
