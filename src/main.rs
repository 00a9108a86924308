// src/main.rs

use axum::routing::get;
use axum::Router;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use gemchat_backend::api::http::{
    create_auth_router, create_chat_router, health_check, liveness_check,
};
use gemchat_backend::config::CONFIG;
use gemchat_backend::db;
use gemchat_backend::llm::{CompletionProvider, GeminiProvider};
use gemchat_backend::state::AppState;
use tower_http::cors::{Any, CorsLayer};

/// Graceful shutdown signal handler for SIGTERM and Ctrl+C
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from_str(&CONFIG.logging.level).unwrap_or(Level::INFO))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting GemChat backend");
    CONFIG.validate()?;

    let pool = db::init_pool(&CONFIG.database.url, CONFIG.database.max_connections).await?;

    let provider: Arc<dyn CompletionProvider> = Arc::new(GeminiProvider::new(
        CONFIG.gemini.api_key.clone(),
        CONFIG.gemini.model.clone(),
    )?);
    info!("Gemini model: {}", CONFIG.gemini.model);

    let app_state = Arc::new(AppState::new(pool, provider));

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/live", get(liveness_check))
        .nest("/auth", create_auth_router())
        .nest("/chat", create_chat_router())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state);

    let bind_address = CONFIG.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!("GemChat API listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");

    Ok(())
}
