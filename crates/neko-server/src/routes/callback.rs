//! Callback Route - LINE Webhook Receiver
//!
//! HTTP handler for webhook deliveries from the LINE platform.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{info, warn};

use neko_integration_line::CallbackRequest;

use crate::models::{CallbackResponse, ErrorResponse};
use crate::AppState;

/// Receive a webhook delivery from LINE
///
/// Image-message events are answered one by one, in delivery order.
/// The delivery is acknowledged with 200 once the body parses; failures
/// on individual events are logged and never surfaced to the platform,
/// which would otherwise retry the whole delivery.
#[utoipa::path(
    post,
    path = "/callback",
    request_body = CallbackRequest,
    responses(
        (status = 200, description = "Delivery processed", body = CallbackResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    ),
    tag = "Callback"
)]
pub async fn callback(
    State(state): State<AppState>,
    payload: Result<Json<CallbackRequest>, JsonRejection>,
) -> Result<Json<CallbackResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Ok(Json(request)) = payload else {
        return Err(invalid_request());
    };

    let images = request.image_messages();
    info!(
        event_count = %request.events.len(),
        image_count = %images.len(),
        "Webhook delivery received"
    );

    for image in &images {
        if let Err(e) = state.image_reply.handle(image).await {
            warn!(error = %e, message_id = %image.message_id, "Failed to reply to image message");
        }
    }

    Ok(Json(CallbackResponse::ok()))
}

/// Reject any other method with the structured error body
async fn invalid_method() -> (StatusCode, Json<ErrorResponse>) {
    invalid_request()
}

fn invalid_request() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::invalid_request()),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/callback", post(callback).fallback(invalid_method))
}
