//! Network construction and classification errors.

use super::error_code::{self, BeliefErrorCode};

/// Errors raised while building a network or classifying a query.
///
/// All of them are caller-input or configuration defects. None leave the
/// network in a changed state; it stays usable after any failed call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("variable \"{label}\" is not in the network")]
    UnknownVariable { label: String },

    #[error("node {node} has no probability for parent combination \"{key}\"")]
    MissingParentCombination { node: String, key: String },

    #[error("node {node} expects {expected} parent values, got {actual}")]
    InvalidParentArity {
        node: String,
        expected: usize,
        actual: usize,
    },

    #[error("variable \"{label}\" has no value in the assignment")]
    UnboundVariable { label: String },

    #[error("variable \"{label}\" is defined more than once")]
    DuplicateVariable { label: String },

    #[error("node {node} has an invalid probability table key \"{key}\"")]
    InvalidCptKey { node: String, key: String },

    #[error("node {node} has probability {value} for key \"{key}\", expected a value in [0, 1]")]
    InvalidProbability {
        node: String,
        key: String,
        value: f64,
    },

    #[error("node {node} declares {count} parents, max {max}")]
    TooManyParents {
        node: String,
        count: usize,
        max: usize,
    },

    #[error("query leaves {count} hidden variables, max {max}")]
    TooManyHiddenVariables { count: usize, max: usize },
}

/// Result alias used throughout the inference engine.
pub type InferenceResult<T> = Result<T, InferenceError>;

impl BeliefErrorCode for InferenceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyQuery => error_code::EMPTY_QUERY,
            Self::UnknownVariable { .. } => error_code::UNKNOWN_VARIABLE,
            Self::MissingParentCombination { .. } => error_code::MISSING_PARENT_COMBINATION,
            Self::InvalidParentArity { .. } => error_code::INVALID_PARENT_ARITY,
            Self::UnboundVariable { .. } => error_code::UNBOUND_VARIABLE,
            Self::DuplicateVariable { .. } => error_code::DUPLICATE_VARIABLE,
            Self::InvalidCptKey { .. } => error_code::INVALID_CPT_KEY,
            Self::InvalidProbability { .. } => error_code::INVALID_PROBABILITY,
            Self::TooManyParents { .. } => error_code::TOO_MANY_PARENTS,
            Self::TooManyHiddenVariables { .. } => error_code::TOO_MANY_HIDDEN_VARIABLES,
        }
    }
}
