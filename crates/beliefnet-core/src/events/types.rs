//! Trace event payloads. Borrowed so that nothing is allocated for them
//! unless a handler is registered.

use crate::types::Truth;

/// One conditional factor of a joint score.
#[derive(Debug, Clone, Copy)]
pub struct FactorEvent<'a> {
    pub node: &'a str,
    pub value: Truth,
    /// Parent labels with their bound values, in declared order.
    pub parents: &'a [(&'a str, Truth)],
    pub probability: f64,
}

/// A full assignment has been scored. Marks the end of its factor events.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentScoredEvent {
    /// Value bound to the target, if the assignment binds it.
    pub target_value: Option<Truth>,
    pub score: f64,
}

/// The classification decision for one query.
#[derive(Debug, Clone, Copy)]
pub struct DecisionEvent<'a> {
    pub target: &'a str,
    pub true_score: f64,
    pub false_score: f64,
    pub completions: u64,
    pub target_is_true: bool,
}
