//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between the platform
//! integration and the external services.

mod image_reply;

pub use image_reply::{ImageReplyService, ReplyOutcome};
