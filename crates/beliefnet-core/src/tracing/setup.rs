//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the beliefnet tracing/logging system.
///
/// Reads `BELIEFNET_LOG` for filter directives, e.g.
/// `BELIEFNET_LOG=beliefnet=debug,beliefnet::trace=debug`.
///
/// Falls back to `beliefnet=info` if `BELIEFNET_LOG` is not set or is invalid.
/// Idempotent; a global subscriber installed elsewhere is left in place.
pub fn init_tracing() {
    init_with_fallback(DEFAULT_LOG_FILTER);
}

/// Same as [`init_tracing`], with the fallback filter taken from config.
pub fn init_tracing_with(config: &ObservabilityConfig) {
    init_with_fallback(config.effective_log_filter());
}

fn init_with_fallback(fallback: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(fallback))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .with(filter)
            .try_init();
    });
}
