//! Conditional probability tables keyed by parent truth combination.

use beliefnet_core::errors::{InferenceError, InferenceResult};
use beliefnet_core::types::collections::FxHashMap;
use beliefnet_core::ParentKey;

/// `P(node = true | parents)` for every listed parent combination.
///
/// Only the true case is stored; callers derive the false case as `1 - p`.
/// A parentless node's table has width 0 and a single entry, its prior.
#[derive(Debug, Clone, PartialEq)]
pub struct Cpt {
    width: usize,
    table: FxHashMap<ParentKey, f64>,
}

impl Cpt {
    /// Build a table for `node`, checking key width and probability range.
    pub fn new<I>(node: &str, width: usize, entries: I) -> InferenceResult<Self>
    where
        I: IntoIterator<Item = (ParentKey, f64)>,
    {
        let mut table = FxHashMap::default();
        for (key, probability) in entries {
            if key.width() != width {
                return Err(InferenceError::InvalidParentArity {
                    node: node.to_string(),
                    expected: width,
                    actual: key.width(),
                });
            }
            // NaN fails the range check too.
            if !(0.0..=1.0).contains(&probability) {
                return Err(InferenceError::InvalidProbability {
                    node: node.to_string(),
                    key: key.to_string(),
                    value: probability,
                });
            }
            table.insert(key, probability);
        }
        Ok(Self { width, table })
    }

    /// Single-entry table holding an unconditional prior.
    pub fn prior(node: &str, probability: f64) -> InferenceResult<Self> {
        Self::new(node, 0, [(ParentKey::EMPTY, probability)])
    }

    /// Stored `P(true | key)`, if the table lists `key`.
    pub fn probability_true(&self, key: ParentKey) -> Option<f64> {
        self.table.get(&key).copied()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// True when every one of the `2^width` combinations is listed.
    pub fn is_complete(&self) -> bool {
        self.width < 64 && self.table.len() as u64 == 1u64 << self.width
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParentKey, f64)> + '_ {
        self.table.iter().map(|(k, p)| (*k, *p))
    }
}
