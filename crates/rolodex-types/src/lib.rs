//! Shared domain types for Rolodex.
//!
//! This crate contains the user record, the directory configuration, and the
//! error types shared between the service layer and its adapters.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod user;
