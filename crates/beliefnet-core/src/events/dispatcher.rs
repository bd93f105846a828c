//! TraceDispatcher: synchronous dispatch with zero overhead when empty.

use std::fmt;
use std::sync::Arc;

use super::handler::TraceHandler;
use super::types::*;

/// Synchronous dispatcher wrapping a list of trace handlers.
#[derive(Clone, Default)]
pub struct TraceDispatcher {
    handlers: Vec<Arc<dyn TraceHandler>>,
}

impl TraceDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn TraceHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// True when no handler is registered. Callers skip building events then.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handlers that panic are caught and do not prevent subsequent handlers
    /// from receiving the event.
    fn emit<F: Fn(&dyn TraceHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("trace handler panicked, event dropped for that handler");
            }
        }
    }

    pub fn emit_factor(&self, event: &FactorEvent<'_>) {
        self.emit(|h| h.on_factor(event));
    }

    pub fn emit_assignment_scored(&self, event: &AssignmentScoredEvent) {
        self.emit(|h| h.on_assignment_scored(event));
    }

    pub fn emit_decision(&self, event: &DecisionEvent<'_>) {
        self.emit(|h| h.on_decision(event));
    }
}

impl fmt::Debug for TraceDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
