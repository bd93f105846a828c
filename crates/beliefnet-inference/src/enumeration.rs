//! Exhaustive enumeration of hidden-variable completions.
//!
//! The `2^k` completions of a base binding over `k` unknowns are addressed by
//! index. Completion `i` binds unknown `j` to true iff bit `k - 1 - j` of `i`
//! is clear, so the first unknown varies slowest and true comes before false.
//! Nothing is materialized until asked for: each completion is built on
//! demand as an owned clone of the base, so peak memory is one binding per
//! item in flight rather than all `2^k` at once.

use beliefnet_core::constants::HIDDEN_VARIABLE_LIMIT;
use beliefnet_core::errors::{InferenceError, InferenceResult};
use beliefnet_core::{Evidence, Truth};

use crate::assignment::{Assignment, NodeIndex};

/// A binding container the enumeration engine can extend.
pub trait Bindings: Clone {
    type Var;

    fn bind(&mut self, var: &Self::Var, value: Truth);
}

impl Bindings for Evidence {
    type Var = String;

    fn bind(&mut self, var: &String, value: Truth) {
        self.insert(var.clone(), value);
    }
}

impl Bindings for Assignment {
    type Var = NodeIndex;

    fn bind(&mut self, var: &NodeIndex, value: Truth) {
        Assignment::bind(self, *var, value);
    }
}

/// The completions of `base` over `unknowns`.
pub struct Completions<'a, B: Bindings> {
    base: &'a B,
    unknowns: &'a [B::Var],
    count: u64,
}

impl<'a, B: Bindings> Completions<'a, B> {
    /// Fails with `TooManyHiddenVariables` when `unknowns` exceeds
    /// `max_hidden` (itself capped at 63 so indices fit a `u64`).
    pub fn new(base: &'a B, unknowns: &'a [B::Var], max_hidden: usize) -> InferenceResult<Self> {
        let max = max_hidden.min(HIDDEN_VARIABLE_LIMIT);
        if unknowns.len() > max {
            return Err(InferenceError::TooManyHiddenVariables {
                count: unknowns.len(),
                max,
            });
        }
        Ok(Self {
            base,
            unknowns,
            count: 1u64 << unknowns.len(),
        })
    }

    /// Number of completions, `2^k`. Never zero.
    pub fn len(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of hidden variables, `k`.
    pub fn hidden(&self) -> usize {
        self.unknowns.len()
    }

    /// Completion `index`, or `None` past the end.
    pub fn get(&self, index: u64) -> Option<B> {
        (index < self.count).then(|| self.materialize(index))
    }

    /// A fresh pass over every completion, in index order.
    pub fn iter(&self) -> CompletionIter<'a, B> {
        CompletionIter {
            completions: *self,
            next: 0,
        }
    }

    fn materialize(&self, index: u64) -> B {
        let k = self.unknowns.len();
        let mut completion = self.base.clone();
        for (j, var) in self.unknowns.iter().enumerate() {
            let bit = (index >> (k - 1 - j)) & 1;
            completion.bind(var, Truth::ALL[bit as usize]);
        }
        completion
    }
}

impl<B: Bindings> Clone for Completions<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: Bindings> Copy for Completions<'_, B> {}

impl<'a, B: Bindings> IntoIterator for &Completions<'a, B> {
    type Item = B;
    type IntoIter = CompletionIter<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Restartable iterator over completions. Cloning it forks the position.
pub struct CompletionIter<'a, B: Bindings> {
    completions: Completions<'a, B>,
    next: u64,
}

impl<B: Bindings> Clone for CompletionIter<'_, B> {
    fn clone(&self) -> Self {
        Self {
            completions: self.completions,
            next: self.next,
        }
    }
}

impl<B: Bindings> Iterator for CompletionIter<'_, B> {
    type Item = B;

    fn next(&mut self) -> Option<B> {
        let item = self.completions.get(self.next)?;
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.completions.count - self.next;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<B: Bindings> ExactSizeIterator for CompletionIter<'_, B> {}

impl<B: Bindings> std::iter::FusedIterator for CompletionIter<'_, B> {}
