//! Observability setup for AetheriBot.

pub mod tracing_setup;
