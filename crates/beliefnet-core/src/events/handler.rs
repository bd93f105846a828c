//! TraceHandler trait, all methods with no-op defaults.

use super::types::*;

/// Receives inference diagnostics.
///
/// Handlers only override the events they care about. The trait requires
/// `Send + Sync` because a network may be shared across threads and, with
/// parallel scoring enabled, events arrive from rayon workers.
pub trait TraceHandler: Send + Sync {
    fn on_factor(&self, _event: &FactorEvent<'_>) {}
    fn on_assignment_scored(&self, _event: &AssignmentScoredEvent) {}
    fn on_decision(&self, _event: &DecisionEvent<'_>) {}
}
