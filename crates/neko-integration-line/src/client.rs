//! LINE Messaging API client

use neko::domain::ReplyMessage;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::LineConfig;

/// LINE Messaging API client
///
/// Covers the two endpoints the bot uses: message content download and
/// the reply API. Both check the response status, so a rejected call
/// surfaces as [`LineError::ApiError`] instead of garbage bytes or a
/// silently dropped reply.
#[derive(Clone)]
pub struct LineClient {
    http: Client,
    config: LineConfig,
}

impl LineClient {
    /// Create a new LINE client
    pub fn new(config: LineConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Download the binary content of a message (the image bytes)
    pub async fn message_content(&self, message_id: &str) -> Result<Vec<u8>, LineError> {
        let url = format!(
            "{}/v2/bot/message/{}/content",
            self.config.data_api_base, message_id
        );
        debug!(message_id = %message_id, "Fetching message content from LINE");

        let response = self
            .http
            .get(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.channel_access_token),
            )
            .send()
            .await
            .map_err(|e| LineError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| LineError::RequestFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    /// Reply to an event using its one-shot reply token
    pub async fn reply(
        &self,
        reply_token: &str,
        messages: &[ReplyMessage],
    ) -> Result<(), LineError> {
        let url = format!("{}/v2/bot/message/reply", self.config.api_base);
        debug!(message_count = %messages.len(), "Sending reply to LINE");

        let request = ReplyRequest {
            reply_token: reply_token.to_string(),
            messages: messages.to_vec(),
        };

        let response = self
            .http
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.config.channel_access_token),
            )
            .json(&request)
            .send()
            .await
            .inspect_err(|e| error!(error = %e, "Failed to send LINE reply"))
            .map_err(|e| LineError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct ReplyRequest {
    #[serde(rename = "replyToken")]
    reply_token: String,
    messages: Vec<ReplyMessage>,
}

/// LINE API error types
#[derive(Debug, Error)]
pub enum LineError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },
}

async fn api_error(response: reqwest::Response) -> LineError {
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error body".to_string());
    map_http_error(status, body)
}

fn map_http_error(status: StatusCode, body: String) -> LineError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("message")
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.clone());

    LineError::ApiError {
        status: status.as_u16(),
        message,
    }
}
