//! Directory service and port definitions for Rolodex.
//!
//! This crate defines the "ports" (store and renderer traits) that the
//! infrastructure layer implements, plus the service that orchestrates them.
//! It depends only on `rolodex-types` -- never on `rolodex-infra` or any
//! storage or template crate.

pub mod render;
pub mod repository;
pub mod retry;
pub mod service;
