/// Default cap on hidden variables per classification (2^20 completions).
pub const DEFAULT_MAX_HIDDEN_VARIABLES: usize = 20;

/// Hard cap on hidden variables: completion indices are `u64`.
pub const HIDDEN_VARIABLE_LIMIT: usize = 63;

/// Maximum number of parents a node may declare: parent keys are packed in a `u64`.
pub const MAX_PARENTS: usize = 64;

/// Default hidden-variable count at which parallel scoring kicks in.
pub const DEFAULT_PARALLEL_MIN_HIDDEN: usize = 12;

/// Default `EnvFilter` directive when `BELIEFNET_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "beliefnet=info";

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "BELIEFNET_LOG";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "beliefnet.toml";

/// Tolerance used when comparing complementary probabilities.
pub const PROBABILITY_EPSILON: f64 = 1e-9;
