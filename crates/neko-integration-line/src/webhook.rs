//! LINE webhook payload types
//!
//! Wire-format types for deliveries to the bot's callback endpoint,
//! plus the filter that picks out the image messages the bot acts on.
//! Field names follow LINE's JSON (`replyToken`, `userId`); unknown
//! fields are ignored so new platform fields do not break parsing.

use neko::domain::ImageMessage;
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

/// Webhook delivery from the LINE platform
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CallbackRequest {
    /// Bot user ID the delivery was addressed to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// Events in delivery order
    pub events: Vec<WebhookEvent>,
}

impl CallbackRequest {
    /// Extract the image messages the bot can reply to, in delivery order
    pub fn image_messages(&self) -> Vec<ImageMessage> {
        self.events
            .iter()
            .filter_map(WebhookEvent::as_image_message)
            .collect()
    }
}

/// A single webhook event
///
/// Only image-message events are acted on; everything else parses fine
/// and is dropped by the filter.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WebhookEvent {
    /// Event type ("message", "follow", "unfollow", ...)
    #[serde(rename = "type")]
    pub event_type: String,
    /// One-shot token for replying; absent on events that cannot be
    /// replied to
    #[serde(rename = "replyToken", default, skip_serializing_if = "Option::is_none")]
    pub reply_token: Option<String>,
    /// Who sent the event
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<EventSource>,
    /// Message body, present when `event_type` is "message"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<MessagePayload>,
}

impl WebhookEvent {
    /// View this event as a repliable image message, if it is one
    ///
    /// An image message without a reply token cannot be replied to, so
    /// it is skipped with a warning rather than failing the delivery.
    pub fn as_image_message(&self) -> Option<ImageMessage> {
        if self.event_type != "message" {
            return None;
        }
        let message = self.message.as_ref()?;
        if message.message_type != "image" {
            return None;
        }
        match &self.reply_token {
            Some(token) => Some(ImageMessage::new(token.clone(), message.id.clone())),
            None => {
                warn!(message_id = %message.id, "Image message without reply token, skipping");
                None
            }
        }
    }
}

/// Sender of a webhook event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventSource {
    /// Source type ("user", "group", "room")
    #[serde(rename = "type")]
    pub source_type: String,
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "groupId", default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

/// Message carried by a message event
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessagePayload {
    /// Platform message ID
    pub id: String,
    /// Message type ("image", "text", "video", ...)
    #[serde(rename = "type")]
    pub message_type: String,
    /// Text content, present on text messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_image_event_with_platform_extras() {
        let request: CallbackRequest = serde_json::from_value(serde_json::json!({
            "destination": "U0123456789abcdef",
            "events": [{
                "type": "message",
                "mode": "active",
                "timestamp": 1625665242211u64,
                "webhookEventId": "01FZ74A0TDDPYRVKNK77XKC3ZR",
                "deliveryContext": { "isRedelivery": false },
                "source": { "type": "user", "userId": "U4af4980629" },
                "replyToken": "reply-token-1",
                "message": {
                    "id": "msg-100",
                    "type": "image",
                    "contentProvider": { "type": "line" }
                }
            }]
        }))
        .unwrap();

        let images = request.image_messages();
        assert_eq!(images, vec![ImageMessage::new("reply-token-1", "msg-100")]);
        assert_eq!(
            request.events[0].source.as_ref().unwrap().user_id.as_deref(),
            Some("U4af4980629")
        );
    }

    #[test]
    fn ignores_text_messages_and_non_message_events() {
        let request: CallbackRequest = serde_json::from_value(serde_json::json!({
            "events": [
                {
                    "type": "message",
                    "replyToken": "reply-token-1",
                    "source": { "type": "user", "userId": "U1" },
                    "message": { "id": "msg-1", "type": "text", "text": "hello" }
                },
                {
                    "type": "follow",
                    "replyToken": "reply-token-2",
                    "source": { "type": "user", "userId": "U2" }
                }
            ]
        }))
        .unwrap();

        assert!(request.image_messages().is_empty());
    }

    #[test]
    fn skips_image_event_without_reply_token() {
        let request: CallbackRequest = serde_json::from_value(serde_json::json!({
            "events": [{
                "type": "message",
                "source": { "type": "user", "userId": "U1" },
                "message": { "id": "msg-1", "type": "image" }
            }]
        }))
        .unwrap();

        assert!(request.image_messages().is_empty());
    }

    #[test]
    fn keeps_delivery_order_across_mixed_events() {
        let request: CallbackRequest = serde_json::from_value(serde_json::json!({
            "events": [
                {
                    "type": "message",
                    "replyToken": "token-a",
                    "message": { "id": "msg-a", "type": "image" }
                },
                {
                    "type": "message",
                    "replyToken": "token-t",
                    "message": { "id": "msg-t", "type": "text", "text": "not an image" }
                },
                {
                    "type": "message",
                    "replyToken": "token-b",
                    "message": { "id": "msg-b", "type": "image" }
                }
            ]
        }))
        .unwrap();

        assert_eq!(
            request.image_messages(),
            vec![
                ImageMessage::new("token-a", "msg-a"),
                ImageMessage::new("token-b", "msg-b"),
            ]
        );
    }

    #[test]
    fn missing_events_field_fails_to_parse() {
        let result: Result<CallbackRequest, _> =
            serde_json::from_value(serde_json::json!({ "destination": "U1" }));
        assert!(result.is_err());
    }
}
