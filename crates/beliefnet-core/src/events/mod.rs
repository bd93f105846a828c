//! Diagnostic trace channel for inference.
//! Trait with no-op defaults, synchronous dispatch, zero overhead when empty.

pub mod dispatcher;
pub mod handler;
pub mod log_handler;
pub mod types;

pub use dispatcher::TraceDispatcher;
pub use handler::TraceHandler;
pub use log_handler::LogTraceHandler;
pub use types::{AssignmentScoredEvent, DecisionEvent, FactorEvent};
