//! Trace handler that writes every event through `tracing`.

use super::handler::TraceHandler;
use super::types::*;

/// Writes factors as `(hd=t| e=f,d=t): 0.55` lines at `debug` under the
/// `beliefnet::trace` target, and the decision at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTraceHandler;

impl TraceHandler for LogTraceHandler {
    fn on_factor(&self, event: &FactorEvent<'_>) {
        let parents = event
            .parents
            .iter()
            .map(|(label, value)| format!("{label}={value}"))
            .collect::<Vec<_>>()
            .join(",");
        tracing::debug!(
            target: "beliefnet::trace",
            "({}={}| {}): {}",
            event.node,
            event.value,
            parents,
            event.probability
        );
    }

    fn on_assignment_scored(&self, event: &AssignmentScoredEvent) {
        tracing::debug!(
            target: "beliefnet::trace",
            target_value = ?event.target_value,
            score = event.score,
            "assignment scored"
        );
    }

    fn on_decision(&self, event: &DecisionEvent<'_>) {
        tracing::info!(
            target: "beliefnet::trace",
            variable = event.target,
            true_score = event.true_score,
            false_score = event.false_score,
            completions = event.completions,
            "{}: {}",
            event.target,
            if event.target_is_true { "True" } else { "False" }
        );
    }
}
