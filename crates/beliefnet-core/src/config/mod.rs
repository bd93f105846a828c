//! Configuration system for beliefnet.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod beliefnet_config;
pub mod inference_config;
pub mod observability_config;

pub use beliefnet_config::BeliefnetConfig;
pub use inference_config::InferenceConfig;
pub use observability_config::ObservabilityConfig;
