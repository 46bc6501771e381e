//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod cat_verdict;

pub use cat_verdict::*;
