//! Classification decision: which value of the target variable is more probable.
//!
//! With full evidence the two target values are scored directly. With
//! partial evidence every completion of the hidden variables is scored with
//! the target bound both ways and the two sums are compared. The sums are
//! unnormalized; dividing both by P(evidence) would not change the winner.

use std::fmt;

use beliefnet_core::errors::{InferenceError, InferenceResult};
use beliefnet_core::events::DecisionEvent;
use beliefnet_core::{Evidence, Truth};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::assignment::{Assignment, NodeIndex};
use crate::enumeration::Completions;
use crate::joint::JointEvaluator;
use crate::network::Network;

/// Which scoring path a query took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidencePath {
    /// Every non-target variable was observed.
    FullEvidence,
    /// Some variables were hidden and summed over.
    PartialEvidence,
}

/// Unnormalized scores for both target values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassScores {
    pub target: String,
    pub true_score: f64,
    pub false_score: f64,
    /// Completions scored: `2^k` for `k` hidden variables.
    pub completions: u64,
    pub path: EvidencePath,
}

impl ClassScores {
    /// True iff the target's true class strictly wins. Ties go to false.
    pub fn target_is_true(&self) -> bool {
        self.true_score > self.false_score
    }

    pub fn predicted(&self) -> Truth {
        Truth::from(self.target_is_true())
    }
}

impl fmt::Display for ClassScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.target, self.predicted().as_str())
    }
}

impl Network {
    /// Classify `query`: `true` when the target's true value is more probable.
    pub fn classify(&self, query: &Evidence) -> InferenceResult<bool> {
        Ok(self.scores(query)?.target_is_true())
    }

    /// Classify several queries. Scored on the rayon pool when parallel
    /// inference is enabled; results keep the input order either way.
    pub fn classify_batch(&self, queries: &[Evidence]) -> Vec<InferenceResult<bool>> {
        if self.config().effective_parallel() {
            queries.par_iter().map(|q| self.classify(q)).collect()
        } else {
            queries.iter().map(|q| self.classify(q)).collect()
        }
    }

    /// Score both target values for `query`.
    pub fn scores(&self, query: &Evidence) -> InferenceResult<ClassScores> {
        if query.is_empty() {
            return Err(InferenceError::EmptyQuery);
        }

        let target = self.target_index();
        let mut base = Assignment::unbound(self.len());
        for (label, value) in query.iter() {
            let index = self
                .index_of(label)
                .ok_or_else(|| InferenceError::UnknownVariable {
                    label: label.to_string(),
                })?;
            if index == target {
                warn!(variable = label, "query binds the target variable, binding ignored");
                continue;
            }
            base.bind(index, value);
        }

        let unknowns: Vec<NodeIndex> = base.unbound_indices().filter(|&i| i != target).collect();

        let evaluator = self.evaluator();
        let scores = if unknowns.is_empty() {
            let (true_score, false_score) = score_both(&evaluator, base, target)?;
            ClassScores {
                target: self.target().to_string(),
                true_score,
                false_score,
                completions: 1,
                path: EvidencePath::FullEvidence,
            }
        } else {
            self.score_partial(&evaluator, &base, &unknowns)?
        };

        debug!(
            variable = %scores.target,
            evidence = query.len(),
            hidden = unknowns.len(),
            completions = scores.completions,
            true_score = scores.true_score,
            false_score = scores.false_score,
            "classified"
        );

        let tracer = self.tracer();
        if !tracer.is_empty() {
            tracer.emit_decision(&DecisionEvent {
                target: &scores.target,
                true_score: scores.true_score,
                false_score: scores.false_score,
                completions: scores.completions,
                target_is_true: scores.target_is_true(),
            });
        }

        Ok(scores)
    }

    fn score_partial(
        &self,
        evaluator: &JointEvaluator<'_>,
        base: &Assignment,
        unknowns: &[NodeIndex],
    ) -> InferenceResult<ClassScores> {
        let completions =
            Completions::new(base, unknowns, self.config().effective_max_hidden_variables())?;
        let target = self.target_index();
        let parallel = self.config().use_parallel(completions.hidden());

        let (true_score, false_score) = if parallel {
            (0..completions.len())
                .into_par_iter()
                .filter_map(|i| completions.get(i))
                .map(|completion| score_both(evaluator, completion, target))
                .try_reduce(|| (0.0, 0.0), |a, b| Ok((a.0 + b.0, a.1 + b.1)))?
        } else {
            completions
                .iter()
                .try_fold((0.0, 0.0), |acc, completion| {
                    let (t, f) = score_both(evaluator, completion, target)?;
                    Ok::<_, InferenceError>((acc.0 + t, acc.1 + f))
                })?
        };

        debug!(
            hidden = completions.hidden(),
            completions = completions.len(),
            parallel,
            "partial evidence enumerated"
        );

        Ok(ClassScores {
            target: self.target().to_string(),
            true_score,
            false_score,
            completions: completions.len(),
            path: EvidencePath::PartialEvidence,
        })
    }
}

/// Score `assignment` with the target bound true, then false.
fn score_both(
    evaluator: &JointEvaluator<'_>,
    mut assignment: Assignment,
    target: NodeIndex,
) -> InferenceResult<(f64, f64)> {
    assignment.bind(target, Truth::True);
    let true_score = evaluator.score(&assignment)?;
    assignment.bind(target, Truth::False);
    let false_score = evaluator.score(&assignment)?;
    Ok((true_score, false_score))
}
