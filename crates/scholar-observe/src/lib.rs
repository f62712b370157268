//! Observability setup for Scholar.

pub mod tracing_setup;
