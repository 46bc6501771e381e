//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{CallbackResponse, ErrorResponse};
use neko_integration_line::{CallbackRequest, EventSource, MessagePayload, WebhookEvent};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::callback::callback,
    ),
    info(
        title = "Neko API",
        version = "0.1.0",
        description = "ねこ (Neko) - LINE cat-detection bot\n\nReceives image messages, asks Vision whether they show a cat, and replies in English with an optional Japanese translation.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Callback", description = "Callback - LINE webhook receiver"),
    ),
    components(
        schemas(
            // Webhook payload
            CallbackRequest,
            WebhookEvent,
            EventSource,
            MessagePayload,
            // Responses
            CallbackResponse,
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;
