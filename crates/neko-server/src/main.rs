use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use neko::services::CatDetector;
use neko_integration_line::LineIntegration;
use neko_server::application::ImageReplyService;
use neko_server::config::ServerConfig;
use neko_server::{app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🐱 Neko initializing...");

    let config = ServerConfig::from_env()?;

    let integration = Arc::new(LineIntegration::new(config.line_config()));
    tracing::info!("✅ LINE integration ready");

    let detector = CatDetector::new(config.vision_api_url.clone());
    tracing::info!("👀 Vision cat detector ready");

    let translator = config.translator();
    if translator.is_some() {
        tracing::info!("🌐 DeepL translation enabled");
    } else {
        tracing::warn!("⚠️  No DEEPL_AUTH_KEY set - replies stay English-only");
    }

    let image_reply = Arc::new(ImageReplyService::new(integration, detector, translator));
    let state = AppState { image_reply };

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Neko ready on {} - send me cat pictures", config.bind_addr);

    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}
