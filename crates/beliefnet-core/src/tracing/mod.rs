//! Observability for beliefnet.
//! `tracing` crate with `EnvFilter`, filter directives from `BELIEFNET_LOG`.

pub mod setup;

pub use setup::{init_tracing, init_tracing_with};
