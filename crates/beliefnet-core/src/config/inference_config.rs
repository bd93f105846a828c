//! Inference configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_HIDDEN_VARIABLES, DEFAULT_PARALLEL_MIN_HIDDEN};

/// Configuration for exact enumeration and classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InferenceConfig {
    /// Maximum hidden variables a single query may leave unbound. Default: 20.
    pub max_hidden_variables: Option<usize>,
    /// Score completions on the rayon pool. Default: false.
    pub parallel: Option<bool>,
    /// Hidden-variable count at which parallel scoring is used. Default: 12.
    pub parallel_min_hidden: Option<usize>,
    /// Emit per-factor diagnostics through `tracing`. Default: false.
    pub trace: Option<bool>,
}

impl InferenceConfig {
    /// Returns the effective hidden-variable cap, defaulting to 20.
    pub fn effective_max_hidden_variables(&self) -> usize {
        self.max_hidden_variables
            .unwrap_or(DEFAULT_MAX_HIDDEN_VARIABLES)
    }

    /// Returns whether parallel scoring is enabled, defaulting to false.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }

    /// Returns the effective parallel threshold, defaulting to 12.
    pub fn effective_parallel_min_hidden(&self) -> usize {
        self.parallel_min_hidden
            .unwrap_or(DEFAULT_PARALLEL_MIN_HIDDEN)
    }

    /// Returns whether factor tracing is enabled, defaulting to false.
    pub fn effective_trace(&self) -> bool {
        self.trace.unwrap_or(false)
    }

    /// True when a query with `hidden` unknowns should be scored in parallel.
    pub fn use_parallel(&self, hidden: usize) -> bool {
        self.effective_parallel() && hidden >= self.effective_parallel_min_hidden()
    }
}
