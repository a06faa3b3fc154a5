//! Observability setup for the support chat service: structured logging and
//! optional OpenTelemetry span export.

pub mod tracing_setup;
