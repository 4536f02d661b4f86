//! In-memory adapters.

pub mod user;

pub use user::{InMemoryUserStore, SeedError};
