//! English-to-Japanese translation via the DeepL API.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Default endpoint (free tier); pro keys use a different host.
pub const DEFAULT_ENDPOINT: &str = "https://api-free.deepl.com/v2/translate";

const SOURCE_LANG: &str = "EN";
const TARGET_LANG: &str = "JA";

/// Client for the DeepL translation endpoint.
#[derive(Clone)]
pub struct Translator {
    client: Client,
    endpoint: String,
    auth_key: String,
}

impl Translator {
    /// Creates a new translator using the provided auth key.
    pub fn new(auth_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            auth_key: auth_key.into(),
        }
    }

    /// Overrides the API endpoint (pro tier, tests).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Translate English text to Japanese.
    pub async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TranslateError::EmptyText);
        }

        let request = TranslateRequest {
            text: vec![trimmed.to_string()],
            source_lang: SOURCE_LANG.to_string(),
            target_lang: TARGET_LANG.to_string(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.auth_key))
            .json(&request)
            .send()
            .await
            .map_err(|err| TranslateError::RequestFailed(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: TranslateResponse = response
            .json()
            .await
            .map_err(|err| TranslateError::ParseError(err.to_string()))?;

        debug!(translation_count = %payload.translations.len(), "DeepL returned translations");

        payload
            .translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or(TranslateError::NoTranslation)
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct TranslateRequest {
    text: Vec<String>,
    source_lang: String,
    target_lang: String,
}

#[derive(Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    text: String,
}

/// Translation error types
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Text to translate is empty")]
    EmptyText,
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },
    #[error("No translation returned")]
    NoTranslation,
}

fn map_http_error(status: StatusCode, body: String) -> TranslateError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("message")
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.clone());

    TranslateError::ApiError {
        status: status.as_u16(),
        message,
    }
}
