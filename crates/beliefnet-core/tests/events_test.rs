//! Tests for the trace event dispatcher.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use beliefnet_core::events::{
    AssignmentScoredEvent, DecisionEvent, FactorEvent, LogTraceHandler, TraceDispatcher,
    TraceHandler,
};
use beliefnet_core::Truth;

struct CountingHandler {
    factors: AtomicUsize,
    scored: AtomicUsize,
    decisions: AtomicUsize,
}

impl CountingHandler {
    fn new() -> Self {
        Self {
            factors: AtomicUsize::new(0),
            scored: AtomicUsize::new(0),
            decisions: AtomicUsize::new(0),
        }
    }
}

impl TraceHandler for CountingHandler {
    fn on_factor(&self, _event: &FactorEvent<'_>) {
        self.factors.fetch_add(1, Ordering::Relaxed);
    }

    fn on_assignment_scored(&self, _event: &AssignmentScoredEvent) {
        self.scored.fetch_add(1, Ordering::Relaxed);
    }

    fn on_decision(&self, _event: &DecisionEvent<'_>) {
        self.decisions.fetch_add(1, Ordering::Relaxed);
    }
}

/// Only cares about decisions; the rest fall through to the defaults.
struct DecisionOnly(AtomicUsize);

impl TraceHandler for DecisionOnly {
    fn on_decision(&self, _event: &DecisionEvent<'_>) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }
}

struct PanickingHandler;

impl TraceHandler for PanickingHandler {
    fn on_decision(&self, _event: &DecisionEvent<'_>) {
        panic!("boom");
    }
}

fn factor() -> FactorEvent<'static> {
    FactorEvent {
        node: "hd",
        value: Truth::True,
        parents: &[("e", Truth::False), ("d", Truth::True)],
        probability: 0.55,
    }
}

fn decision() -> DecisionEvent<'static> {
    DecisionEvent {
        target: "hd",
        true_score: 0.374,
        false_score: 0.0009,
        completions: 1,
        target_is_true: true,
    }
}

#[test]
fn empty_dispatcher_is_a_no_op() {
    let dispatcher = TraceDispatcher::new();
    assert!(dispatcher.is_empty());
    dispatcher.emit_factor(&factor());
    dispatcher.emit_decision(&decision());
}

#[test]
fn every_handler_receives_every_event() {
    let a = Arc::new(CountingHandler::new());
    let b = Arc::new(CountingHandler::new());
    let mut dispatcher = TraceDispatcher::new();
    dispatcher.register(a.clone());
    dispatcher.register(b.clone());
    assert_eq!(dispatcher.handler_count(), 2);

    dispatcher.emit_factor(&factor());
    dispatcher.emit_factor(&factor());
    dispatcher.emit_assignment_scored(&AssignmentScoredEvent {
        target_value: Some(Truth::True),
        score: 0.374,
    });
    dispatcher.emit_decision(&decision());

    for handler in [&a, &b] {
        assert_eq!(handler.factors.load(Ordering::Relaxed), 2);
        assert_eq!(handler.scored.load(Ordering::Relaxed), 1);
        assert_eq!(handler.decisions.load(Ordering::Relaxed), 1);
    }
}

#[test]
fn default_methods_ignore_other_events() {
    let handler = Arc::new(DecisionOnly(AtomicUsize::new(0)));
    let mut dispatcher = TraceDispatcher::new();
    dispatcher.register(handler.clone());
    dispatcher.emit_factor(&factor());
    dispatcher.emit_decision(&decision());
    assert_eq!(handler.0.load(Ordering::Relaxed), 1);
}

#[test]
fn panicking_handler_does_not_starve_the_rest() {
    let counter = Arc::new(CountingHandler::new());
    let mut dispatcher = TraceDispatcher::new();
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counter.clone());
    dispatcher.emit_decision(&decision());
    assert_eq!(counter.decisions.load(Ordering::Relaxed), 1);
}

#[test]
fn log_handler_accepts_every_event() {
    let mut dispatcher = TraceDispatcher::new();
    dispatcher.register(Arc::new(LogTraceHandler));
    dispatcher.emit_factor(&factor());
    dispatcher.emit_assignment_scored(&AssignmentScoredEvent {
        target_value: None,
        score: 1.0,
    });
    dispatcher.emit_decision(&decision());
    assert_eq!(format!("{dispatcher:?}"), "TraceDispatcher { handlers: 1 }");
}
