//! Joint evaluator: scores one full assignment as a product of conditional factors.

use beliefnet_core::errors::{InferenceError, InferenceResult};
use beliefnet_core::events::{AssignmentScoredEvent, FactorEvent};
use beliefnet_core::types::collections::SmallVec4;
use beliefnet_core::Truth;

use crate::assignment::{Assignment, NodeIndex};
use crate::network::Network;
use crate::node::Node;

/// Scores assignments against one network.
///
/// The score is the product of `P(node | parents)` over every node that has
/// parents. Parentless nodes contribute no factor: root priors never enter
/// the score. Both target values of a query share the same root bindings,
/// but roots that are hidden variables are summed over without their prior
/// weight, so this is not the textbook joint probability.
#[derive(Debug, Clone, Copy)]
pub struct JointEvaluator<'n> {
    network: &'n Network,
}

impl<'n> JointEvaluator<'n> {
    pub fn new(network: &'n Network) -> Self {
        Self { network }
    }

    /// Score `assignment`. Every node with parents, and each of its parents,
    /// must be bound; an empty product scores 1.0.
    pub fn score(&self, assignment: &Assignment) -> InferenceResult<f64> {
        self.score_nodes(assignment, self.network.indexed_nodes())
    }

    /// Same product, visiting nodes in the order given.
    pub(crate) fn score_nodes<'a, I>(&self, assignment: &Assignment, nodes: I) -> InferenceResult<f64>
    where
        I: IntoIterator<Item = (NodeIndex, &'a Node)>,
    {
        let tracer = self.network.tracer();
        let tracing = !tracer.is_empty();
        let mut product = 1.0;

        for (index, node) in nodes {
            if !node.has_parents() {
                continue;
            }
            let value = self.require(assignment, index)?;
            let parent_values = node
                .parents()
                .iter()
                .map(|&p| self.require(assignment, p))
                .collect::<InferenceResult<SmallVec4<Truth>>>()?;
            let probability = node.conditional_probability(value, &parent_values)?;

            if tracing {
                let parents: SmallVec4<(&str, Truth)> = node
                    .parent_labels()
                    .iter()
                    .map(String::as_str)
                    .zip(parent_values.iter().copied())
                    .collect();
                tracer.emit_factor(&FactorEvent {
                    node: node.label(),
                    value,
                    parents: &parents,
                    probability,
                });
            }
            product *= probability;
        }

        if tracing {
            tracer.emit_assignment_scored(&AssignmentScoredEvent {
                target_value: assignment.get(self.network.target_index()),
                score: product,
            });
        }
        Ok(product)
    }

    fn require(&self, assignment: &Assignment, index: NodeIndex) -> InferenceResult<Truth> {
        assignment
            .get(index)
            .ok_or_else(|| InferenceError::UnboundVariable {
                label: self.network.label_of(index).unwrap_or("?").to_string(),
            })
    }
}
