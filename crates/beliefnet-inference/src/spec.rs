//! Serializable network definitions.

use std::collections::BTreeMap;

use beliefnet_core::config::InferenceConfig;
use beliefnet_core::errors::InferenceResult;
use serde::{Deserialize, Serialize};

use crate::network::{Network, NetworkBuilder};

/// Definition of one node.
///
/// `cpt` maps parent symbol strings (`"tf"` = first parent true, second
/// false) to `P(true | combination)`. A parentless node lists its prior
/// under `"t"` (or `""`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub label: String,
    #[serde(default)]
    pub parents: Vec<String>,
    pub cpt: BTreeMap<String, f64>,
}

impl NodeSpec {
    /// A node with the given parents and an empty table.
    pub fn new<I, S>(label: impl Into<String>, parents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            parents: parents.into_iter().map(Into::into).collect(),
            cpt: BTreeMap::new(),
        }
    }

    /// A parentless node with prior `P(true) = probability`.
    pub fn root(label: impl Into<String>, probability: f64) -> Self {
        Self::new(label, Vec::<String>::new()).entry("t", probability)
    }

    /// Add a table entry, builder style.
    pub fn entry(mut self, key: impl Into<String>, probability: f64) -> Self {
        self.cpt.insert(key.into(), probability);
        self
    }
}

/// Definition of a whole network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub target: String,
    pub nodes: Vec<NodeSpec>,
}

impl NetworkSpec {
    pub fn into_builder(self) -> NetworkBuilder {
        NetworkBuilder::new(self.target).nodes(self.nodes)
    }

    pub fn build(self) -> InferenceResult<Network> {
        self.into_builder().build()
    }

    pub fn build_with(self, config: InferenceConfig) -> InferenceResult<Network> {
        self.into_builder().config(config).build()
    }
}
