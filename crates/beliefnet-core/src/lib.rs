//! # beliefnet-core
//!
//! Foundation crate for the beliefnet inference engine.
//! Defines truth values, parent keys, evidence, errors, config, trace events,
//! tracing setup, and constants. The inference crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::BeliefnetConfig;
pub use errors::{ConfigError, InferenceError, InferenceResult};
pub use types::{Evidence, ParentKey, Truth};
