//! The network: immutable nodes, a label index, and the target variable.

use std::sync::Arc;

use beliefnet_core::config::InferenceConfig;
use beliefnet_core::constants::MAX_PARENTS;
use beliefnet_core::errors::{InferenceError, InferenceResult};
use beliefnet_core::events::{LogTraceHandler, TraceDispatcher, TraceHandler};
use beliefnet_core::types::collections::{FxHashMap, SmallVec4};
use beliefnet_core::ParentKey;
use tracing::debug;

use crate::assignment::NodeIndex;
use crate::cpt::Cpt;
use crate::joint::JointEvaluator;
use crate::node::Node;
use crate::spec::NodeSpec;

/// A binary Bayesian belief network with a designated target variable.
///
/// Built once by [`NetworkBuilder`] and read-only afterwards, so a single
/// network can serve concurrent `classify` calls without locking.
#[derive(Debug)]
pub struct Network {
    nodes: Vec<Node>,
    index: FxHashMap<String, NodeIndex>,
    target: NodeIndex,
    non_target: Vec<NodeIndex>,
    config: InferenceConfig,
    tracer: TraceDispatcher,
}

impl Network {
    pub fn builder(target: impl Into<String>) -> NetworkBuilder {
        NetworkBuilder::new(target)
    }

    pub fn target(&self) -> &str {
        self.nodes[self.target.0].label()
    }

    pub fn target_index(&self) -> NodeIndex {
        self.target
    }

    pub fn node(&self, label: &str) -> Option<&Node> {
        self.index_of(label).map(|i| &self.nodes[i.0])
    }

    pub fn node_at(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index.0)
    }

    pub fn index_of(&self, label: &str) -> Option<NodeIndex> {
        self.index.get(label).copied()
    }

    pub fn label_of(&self, index: NodeIndex) -> Option<&str> {
        self.node_at(index).map(Node::label)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every node, in definition order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn indexed_nodes(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeIndex(i), n))
    }

    /// Labels of every variable except the target, in definition order.
    pub fn non_target_labels(&self) -> impl Iterator<Item = &str> {
        self.non_target.iter().map(|i| self.nodes[i.0].label())
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    pub fn tracer(&self) -> &TraceDispatcher {
        &self.tracer
    }

    pub fn evaluator(&self) -> JointEvaluator<'_> {
        JointEvaluator::new(self)
    }
}

/// Collects node definitions and builds a [`Network`].
#[derive(Debug, Clone)]
pub struct NetworkBuilder {
    target: String,
    specs: Vec<NodeSpec>,
    config: InferenceConfig,
    verbose: bool,
    tracer: TraceDispatcher,
}

impl NetworkBuilder {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            specs: Vec::new(),
            config: InferenceConfig::default(),
            verbose: false,
            tracer: TraceDispatcher::new(),
        }
    }

    pub fn node(mut self, spec: NodeSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn nodes(mut self, specs: impl IntoIterator<Item = NodeSpec>) -> Self {
        self.specs.extend(specs);
        self
    }

    pub fn config(mut self, config: InferenceConfig) -> Self {
        self.config = config;
        self
    }

    /// Register a [`LogTraceHandler`]: factor lines at `debug` and the
    /// decision at `info`, both under the `beliefnet::trace` target.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn trace_handler(mut self, handler: Arc<dyn TraceHandler>) -> Self {
        self.tracer.register(handler);
        self
    }

    pub fn build(self) -> InferenceResult<Network> {
        let mut index = FxHashMap::default();
        for (i, spec) in self.specs.iter().enumerate() {
            if index.insert(spec.label.clone(), NodeIndex(i)).is_some() {
                return Err(InferenceError::DuplicateVariable {
                    label: spec.label.clone(),
                });
            }
        }

        let target = *index
            .get(&self.target)
            .ok_or_else(|| InferenceError::UnknownVariable {
                label: self.target.clone(),
            })?;

        let nodes = self
            .specs
            .into_iter()
            .map(|spec| build_node(spec, &index))
            .collect::<InferenceResult<Vec<_>>>()?;

        let non_target = (0..nodes.len())
            .map(NodeIndex)
            .filter(|&i| i != target)
            .collect();

        let mut tracer = self.tracer;
        if self.verbose || self.config.effective_trace() {
            tracer.register(Arc::new(LogTraceHandler));
        }

        debug!(
            nodes = nodes.len(),
            variable = %self.target,
            trace_handlers = tracer.handler_count(),
            "network built"
        );

        Ok(Network {
            nodes,
            index,
            target,
            non_target,
            config: self.config,
            tracer,
        })
    }
}

fn build_node(spec: NodeSpec, index: &FxHashMap<String, NodeIndex>) -> InferenceResult<Node> {
    if spec.parents.len() > MAX_PARENTS {
        return Err(InferenceError::TooManyParents {
            node: spec.label,
            count: spec.parents.len(),
            max: MAX_PARENTS,
        });
    }

    let parents = spec
        .parents
        .iter()
        .map(|p| {
            index
                .get(p)
                .copied()
                .ok_or_else(|| InferenceError::UnknownVariable { label: p.clone() })
        })
        .collect::<InferenceResult<SmallVec4<NodeIndex>>>()?;

    let entries = spec
        .cpt
        .iter()
        .map(|(key, &p)| Ok((parse_key(&spec.label, key, parents.is_empty())?, p)))
        .collect::<InferenceResult<Vec<(ParentKey, f64)>>>()?;
    let cpt = Cpt::new(&spec.label, parents.len(), entries)?;

    Ok(Node::new(spec.label, spec.parents, parents, cpt))
}

/// Root tables list their prior under `"t"` or `""`; everything else is a
/// parent symbol string.
fn parse_key(node: &str, key: &str, root: bool) -> InferenceResult<ParentKey> {
    let invalid = || InferenceError::InvalidCptKey {
        node: node.to_string(),
        key: key.to_string(),
    };
    if root {
        return match key {
            "" | "t" | "T" => Ok(ParentKey::EMPTY),
            _ => Err(invalid()),
        };
    }
    key.parse().map_err(|_| invalid())
}
