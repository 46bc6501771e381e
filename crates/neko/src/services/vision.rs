//! Cat detection via Google Cloud Vision label annotation.
//!
//! Sends `LABEL_DETECTION` requests for raw image bytes and reduces the
//! returned labels to a [`CatVerdict`].

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::domain::{CatVerdict, LabelAnnotation};

/// How many labels to ask the service for per image
const MAX_RESULTS: u32 = 10;

/// Client for the Vision image-labeling endpoint.
///
/// The endpoint URL carries the API key as a query parameter, so no
/// auth header is sent.
#[derive(Clone)]
pub struct CatDetector {
    client: Client,
    endpoint: String,
}

impl CatDetector {
    /// Creates a new detector against the given annotate endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Label an image and reduce the labels to a verdict.
    pub async fn detect(&self, image: &[u8]) -> Result<CatVerdict, VisionError> {
        let labels = self.annotate(image).await?;
        Ok(CatVerdict::from_labels(&labels))
    }

    /// Request label annotations for the given image bytes.
    ///
    /// A successful response without a `labelAnnotations` field yields
    /// an empty list, not an error.
    pub async fn annotate(&self, image: &[u8]) -> Result<Vec<LabelAnnotation>, VisionError> {
        if image.is_empty() {
            return Err(VisionError::EmptyImage);
        }

        let request = AnnotateRequest {
            requests: vec![AnnotateImageRequest {
                image: ImageContent {
                    content: BASE64.encode(image),
                },
                features: vec![Feature {
                    feature_type: "LABEL_DETECTION".to_string(),
                    max_results: MAX_RESULTS,
                }],
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|err| VisionError::RequestFailed(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, body));
        }

        let payload: AnnotateResponse = response
            .json()
            .await
            .map_err(|err| VisionError::ParseError(err.to_string()))?;

        let labels = payload
            .responses
            .into_iter()
            .next()
            .map(|r| r.label_annotations)
            .unwrap_or_default();

        debug!(label_count = %labels.len(), "Vision returned label annotations");

        Ok(labels)
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct AnnotateRequest {
    requests: Vec<AnnotateImageRequest>,
}

#[derive(Serialize)]
struct AnnotateImageRequest {
    image: ImageContent,
    features: Vec<Feature>,
}

#[derive(Serialize)]
struct ImageContent {
    /// Base64-encoded image bytes
    content: String,
}

#[derive(Serialize)]
struct Feature {
    #[serde(rename = "type")]
    feature_type: String,
    #[serde(rename = "maxResults")]
    max_results: u32,
}

#[derive(Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<AnnotateImageResponse>,
}

#[derive(Deserialize)]
struct AnnotateImageResponse {
    #[serde(rename = "labelAnnotations", default)]
    label_annotations: Vec<LabelAnnotation>,
}

/// Vision API error types
#[derive(Debug, Error)]
pub enum VisionError {
    #[error("Image content is empty")]
    EmptyImage,
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },
}

fn map_http_error(status: StatusCode, body: String) -> VisionError {
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.clone());

    VisionError::ApiError {
        status: status.as_u16(),
        message,
    }
}
