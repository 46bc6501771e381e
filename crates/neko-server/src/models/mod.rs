//! Neko API Models
//!
//! Response DTOs for the webhook endpoint. The request side (the LINE
//! webhook payload) lives in the integration crate.

mod callback;

pub use callback::*;
