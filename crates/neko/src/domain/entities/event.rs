//! ImageMessage Entity
//!
//! Represents an image message received from the messaging platform.

use serde::{Deserialize, Serialize};

/// An image message extracted from a webhook delivery
///
/// Carries the two pieces of platform state the reply pipeline needs:
/// the one-shot reply token and the id used to fetch the image content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageMessage {
    /// Token authorizing a single reply to this event
    pub reply_token: String,
    /// Platform-specific message ID, used to fetch the image bytes
    pub message_id: String,
}

impl ImageMessage {
    /// Create a new image message
    pub fn new(reply_token: impl Into<String>, message_id: impl Into<String>) -> Self {
        Self {
            reply_token: reply_token.into(),
            message_id: message_id.into(),
        }
    }
}
