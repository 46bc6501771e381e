//! Neko Webhook Server
//!
//! Receives LINE webhook deliveries, classifies posted images as cat or
//! not through Google Cloud Vision, and answers through the LINE reply
//! API, optionally appending a Japanese translation from DeepL.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod application;
pub mod config;
pub mod models;
pub mod routes;

use application::ImageReplyService;
use neko_integration_line::LineIntegration;

/// Type alias for the application service with the concrete platform integration
pub type AppImageReplyService = ImageReplyService<LineIntegration>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub image_reply: Arc<AppImageReplyService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Neko is running - ready to spot cats".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the router with shared state
pub fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::callback::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
