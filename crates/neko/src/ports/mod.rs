//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems.
//!
//! Implementations of these traits live in integration crates.

pub mod integration;

// Re-exports
pub use integration::*;
