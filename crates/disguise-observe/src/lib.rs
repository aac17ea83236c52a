//! Observability setup for the disguise binaries.

pub mod tracing_setup;
