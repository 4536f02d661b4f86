//! Infrastructure layer for Rolodex.
//!
//! Contains implementations of the traits defined in `rolodex-core`: a
//! concurrent in-memory user store and a minijinja business card renderer,
//! plus the configuration loader used by the binary.

pub mod config;
pub mod memory;
pub mod render;
