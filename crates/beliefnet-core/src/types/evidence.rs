//! Evidence: a partial `label -> Truth` binding supplied per classification.

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

use super::truth::{ParseTruthError, Truth};

/// Observed values for some network variables.
///
/// Ordered by label so diagnostics and error reporting are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Evidence {
    values: BTreeMap<String, Truth>,
}

impl Evidence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, label: impl Into<String>, value: Truth) -> Self {
        self.values.insert(label.into(), value);
        self
    }

    /// Build from `(label, symbol)` pairs such as `("e", "f")`.
    pub fn from_symbols<'a, I>(pairs: I) -> Result<Self, ParseTruthError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut evidence = Self::new();
        for (label, symbol) in pairs {
            evidence.insert(label, symbol.parse::<Truth>()?);
        }
        Ok(evidence)
    }

    /// Bind `label`, returning the previous value if any.
    pub fn insert(&mut self, label: impl Into<String>, value: Truth) -> Option<Truth> {
        self.values.insert(label.into(), value)
    }

    pub fn remove(&mut self, label: &str) -> Option<Truth> {
        self.values.remove(label)
    }

    pub fn get(&self, label: &str) -> Option<Truth> {
        self.values.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.values.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Truth)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, Truth)> for Evidence {
    fn from_iter<I: IntoIterator<Item = (K, Truth)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, Truth); N]> for Evidence {
    fn from(pairs: [(K, Truth); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for Evidence {
    type Item = (String, Truth);
    type IntoIter = btree_map::IntoIter<String, Truth>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
