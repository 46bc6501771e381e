//! Server configuration from environment variables

use anyhow::{Context, Result};
use neko::services::Translator;
use neko_integration_line::LineConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Environment-derived configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// LINE channel access token
    pub channel_access_token: String,
    /// Full Vision annotate URL with the API key embedded
    pub vision_api_url: String,
    /// DeepL auth key; translation is disabled when unset
    pub deepl_auth_key: Option<String>,
    /// DeepL endpoint override (pro tier)
    pub deepl_api_url: Option<String>,
    /// LINE Messaging API base override
    pub line_api_url: Option<String>,
    /// LINE data API base override
    pub line_data_api_url: Option<String>,
    /// Listen address
    pub bind_addr: String,
}

impl ServerConfig {
    /// Load the configuration from the environment
    ///
    /// Missing required variables fail startup. Optional services stay
    /// unset here; the caller decides how loudly to report them.
    pub fn from_env() -> Result<Self> {
        let channel_access_token = std::env::var("LINE_CHANNEL_ACCESS_TOKEN")
            .context("LINE_CHANNEL_ACCESS_TOKEN must be set")?;
        let vision_api_url =
            std::env::var("VISION_API_URL").context("VISION_API_URL must be set")?;

        Ok(Self {
            channel_access_token,
            vision_api_url,
            deepl_auth_key: std::env::var("DEEPL_AUTH_KEY").ok(),
            deepl_api_url: std::env::var("DEEPL_API_URL").ok(),
            line_api_url: std::env::var("LINE_API_URL").ok(),
            line_data_api_url: std::env::var("LINE_DATA_API_URL").ok(),
            bind_addr: std::env::var("NEKO_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        })
    }

    /// Build the LINE configuration, applying any base URL overrides
    pub fn line_config(&self) -> LineConfig {
        let mut config = LineConfig::new(self.channel_access_token.clone());
        if let Some(api_base) = &self.line_api_url {
            config = config.with_api_base(api_base.clone());
        }
        if let Some(data_api_base) = &self.line_data_api_url {
            config = config.with_data_api_base(data_api_base.clone());
        }
        config
    }

    /// Build the translator, if an auth key is configured
    pub fn translator(&self) -> Option<Translator> {
        self.deepl_auth_key.as_ref().map(|key| {
            let translator = Translator::new(key.clone());
            match &self.deepl_api_url {
                Some(url) => translator.with_endpoint(url.clone()),
                None => translator,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neko_integration_line::DEFAULT_DATA_API_BASE;

    fn config_with(deepl_auth_key: Option<&str>) -> ServerConfig {
        ServerConfig {
            channel_access_token: "token".to_string(),
            vision_api_url: "https://vision.example/annotate?key=k".to_string(),
            deepl_auth_key: deepl_auth_key.map(str::to_string),
            deepl_api_url: None,
            line_api_url: Some("http://localhost:9000".to_string()),
            line_data_api_url: None,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }

    #[test]
    fn line_config_applies_overrides_and_keeps_defaults() {
        let line = config_with(None).line_config();
        assert_eq!(line.channel_access_token, "token");
        assert_eq!(line.api_base, "http://localhost:9000");
        assert_eq!(line.data_api_base, DEFAULT_DATA_API_BASE);
    }

    #[test]
    fn translator_requires_an_auth_key() {
        assert!(config_with(None).translator().is_none());
        assert!(config_with(Some("deepl-key")).translator().is_some());
    }
}
