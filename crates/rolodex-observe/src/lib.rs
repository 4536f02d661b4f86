//! Logging setup for Rolodex binaries.

pub mod tracing_setup;
