//! BeliefErrorCode trait for structured error reporting.

/// Stable, machine-readable code for every beliefnet error.
///
/// Embedders that surface errors across a process or language boundary
/// match on the code rather than on the rendered message.
pub trait BeliefErrorCode {
    /// Returns the error code string (e.g., "EMPTY_QUERY").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const EMPTY_QUERY: &str = "EMPTY_QUERY";
pub const UNKNOWN_VARIABLE: &str = "UNKNOWN_VARIABLE";
pub const MISSING_PARENT_COMBINATION: &str = "MISSING_PARENT_COMBINATION";
pub const INVALID_PARENT_ARITY: &str = "INVALID_PARENT_ARITY";
pub const UNBOUND_VARIABLE: &str = "UNBOUND_VARIABLE";
pub const DUPLICATE_VARIABLE: &str = "DUPLICATE_VARIABLE";
pub const INVALID_CPT_KEY: &str = "INVALID_CPT_KEY";
pub const INVALID_PROBABILITY: &str = "INVALID_PROBABILITY";
pub const TOO_MANY_PARENTS: &str = "TOO_MANY_PARENTS";
pub const TOO_MANY_HIDDEN_VARIABLES: &str = "TOO_MANY_HIDDEN_VARIABLES";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
