//! Business logic services (use cases).
//!
//! Services orchestrate store and renderer calls. They depend on traits
//! (ports) -- never on concrete infrastructure implementations.

pub mod directory;
