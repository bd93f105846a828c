//! Dense variable bindings indexed by node position.

use std::fmt;

use beliefnet_core::types::collections::SmallVec16;
use beliefnet_core::Truth;

/// Position of a node in its network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub usize);

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One value slot per network variable. Completions handed out by the
/// enumeration engine bind every slot; a query's base assignment does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    values: SmallVec16<Option<Truth>>,
}

impl Assignment {
    /// An assignment over `len` variables with nothing bound.
    pub fn unbound(len: usize) -> Self {
        Self {
            values: std::iter::repeat(None).take(len).collect(),
        }
    }

    /// Bind `index`. Out-of-range indices are ignored.
    pub fn bind(&mut self, index: NodeIndex, value: Truth) {
        if let Some(slot) = self.values.get_mut(index.0) {
            *slot = Some(value);
        }
    }

    /// Builder-style [`bind`](Self::bind).
    pub fn with(mut self, index: NodeIndex, value: Truth) -> Self {
        self.bind(index, value);
        self
    }

    pub fn get(&self, index: NodeIndex) -> Option<Truth> {
        self.values.get(index.0).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Indices with no value, in node order.
    pub fn unbound_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_none())
            .map(|(i, _)| NodeIndex(i))
    }
}
