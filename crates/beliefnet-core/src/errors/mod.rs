//! Error handling for beliefnet.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod inference_error;

pub use config_error::ConfigError;
pub use error_code::BeliefErrorCode;
pub use inference_error::{InferenceError, InferenceResult};
