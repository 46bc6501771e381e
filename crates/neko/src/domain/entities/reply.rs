//! ReplyMessage Entity
//!
//! An outbound message sent back through the platform's reply API.

use serde::{Deserialize, Serialize};

/// A message in the platform's reply payload
///
/// Only text messages are produced by this bot. `message_type` is
/// serialized as the wire field `type`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReplyMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub text: String,
}

impl ReplyMessage {
    /// Create a text reply message
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            message_type: "text".to_string(),
            text: text.into(),
        }
    }
}
