//! A binary variable with its parents and conditional probability table.

use beliefnet_core::errors::{InferenceError, InferenceResult};
use beliefnet_core::types::collections::SmallVec4;
use beliefnet_core::{ParentKey, Truth};

use crate::assignment::NodeIndex;
use crate::cpt::Cpt;

/// One network variable. Immutable once the network is built.
#[derive(Debug, Clone)]
pub struct Node {
    label: String,
    parent_labels: Vec<String>,
    parents: SmallVec4<NodeIndex>,
    cpt: Cpt,
}

impl Node {
    pub(crate) fn new(
        label: String,
        parent_labels: Vec<String>,
        parents: SmallVec4<NodeIndex>,
        cpt: Cpt,
    ) -> Self {
        Self {
            label,
            parent_labels,
            parents,
            cpt,
        }
    }

    /// `P(self = value | parents = parent_values)`.
    ///
    /// `parent_values` follows the declared parent order and must have one
    /// entry per parent; a parentless node takes an empty slice and answers
    /// with its prior.
    pub fn conditional_probability(
        &self,
        value: Truth,
        parent_values: &[Truth],
    ) -> InferenceResult<f64> {
        if parent_values.len() != self.parents.len() {
            return Err(self.arity_error(parent_values.len()));
        }
        let key = ParentKey::from_truths(parent_values)
            .ok_or_else(|| self.arity_error(parent_values.len()))?;
        let p_true = self.cpt.probability_true(key).ok_or_else(|| {
            InferenceError::MissingParentCombination {
                node: self.label.clone(),
                key: key.to_string(),
            }
        })?;
        Ok(match value {
            Truth::True => p_true,
            Truth::False => 1.0 - p_true,
        })
    }

    pub fn has_parents(&self) -> bool {
        !self.parents.is_empty()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn parent_labels(&self) -> &[String] {
        &self.parent_labels
    }

    pub fn parents(&self) -> &[NodeIndex] {
        &self.parents
    }

    pub fn cpt(&self) -> &Cpt {
        &self.cpt
    }

    /// Unconditional `P(true)` of a parentless node.
    pub fn prior(&self) -> Option<f64> {
        if self.has_parents() {
            None
        } else {
            self.cpt.probability_true(ParentKey::EMPTY)
        }
    }

    fn arity_error(&self, actual: usize) -> InferenceError {
        InferenceError::InvalidParentArity {
            node: self.label.clone(),
            expected: self.parents.len(),
            actual,
        }
    }
}
