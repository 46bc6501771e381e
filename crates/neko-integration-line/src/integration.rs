//! MessagingIntegration implementation for LINE

use async_trait::async_trait;
use neko::domain::entities::ReplyMessage;
use neko::domain::errors::DomainError;
use neko::ports::integration::MessagingIntegration;
use tracing::debug;

use crate::client::LineClient;
use crate::config::LineConfig;

/// LINE integration implementing the MessagingIntegration trait
pub struct LineIntegration {
    client: LineClient,
}

impl LineIntegration {
    /// Create a new LINE integration
    pub fn new(config: LineConfig) -> Self {
        Self {
            client: LineClient::new(config),
        }
    }
}

#[async_trait]
impl MessagingIntegration for LineIntegration {
    async fn message_content(&self, message_id: &str) -> Result<Vec<u8>, DomainError> {
        debug!(message_id = %message_id, "Fetching image content through LINE");

        self.client
            .message_content(message_id)
            .await
            .map_err(|e| DomainError::ExternalService(format!("LINE API error: {}", e)))
    }

    async fn send_reply(
        &self,
        reply_token: &str,
        messages: &[ReplyMessage],
    ) -> Result<(), DomainError> {
        debug!(message_count = %messages.len(), "Replying through LINE");

        self.client
            .reply(reply_token, messages)
            .await
            .map_err(|e| DomainError::ExternalService(format!("LINE API error: {}", e)))
    }

    fn name(&self) -> &str {
        "line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_API_BASE, DEFAULT_DATA_API_BASE};

    #[test]
    fn test_config_builder() {
        let config = LineConfig::new("test-token")
            .with_api_base("http://localhost:9000")
            .with_data_api_base("http://localhost:9001");

        assert_eq!(config.channel_access_token, "test-token");
        assert_eq!(config.api_base, "http://localhost:9000");
        assert_eq!(config.data_api_base, "http://localhost:9001");
    }

    #[test]
    fn test_config_defaults() {
        let config = LineConfig::new("test-token");

        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.data_api_base, DEFAULT_DATA_API_BASE);
    }
}
