//! LINE channel configuration

use serde::{Deserialize, Serialize};

/// Default host for the Messaging API (reply endpoint)
pub const DEFAULT_API_BASE: &str = "https://api.line.me";
/// Default host for message content downloads
pub const DEFAULT_DATA_API_BASE: &str = "https://api-data.line.me";

/// Configuration for LINE integration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineConfig {
    /// Long-lived channel access token from the LINE developer console
    pub channel_access_token: String,
    /// Base URL for the Messaging API
    pub api_base: String,
    /// Base URL for the data API, which serves message content
    pub data_api_base: String,
}

impl LineConfig {
    /// Create a new LINE configuration with just a channel access token
    pub fn new(channel_access_token: impl Into<String>) -> Self {
        Self {
            channel_access_token: channel_access_token.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            data_api_base: DEFAULT_DATA_API_BASE.to_string(),
        }
    }

    /// Override the Messaging API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Override the data API base URL
    pub fn with_data_api_base(mut self, data_api_base: impl Into<String>) -> Self {
        self.data_api_base = data_api_base.into();
        self
    }
}
