//! HTTP service command handler.

use ghostwriter_database::{ContentStore, ProfileStore, create_pool, run_migrations};
use ghostwriter_models::{ImageClient, OpenAiClient};
use ghostwriter_pipeline::GenerationSettings;
use ghostwriter_server::{AppState, GhostwriterConfig, SessionVerifier, create_router};
use std::path::PathBuf;
use std::sync::Arc;

/// Handle the `serve` command.
///
/// Assembles configuration, runs pending migrations, wires the stores and
/// external clients into [`AppState`], and serves until Ctrl+C.
pub async fn handle_serve_command(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = GhostwriterConfig::load(config_path.as_deref())?;

    let pool = create_pool(
        config.database().url(),
        *config.database().max_connections(),
    )?;
    run_migrations(&pool)?;

    ghostwriter_core::init_observability("ghostwriter", 60).map_err(anyhow::Error::msg)?;

    let generation = config.generation();
    let driver = OpenAiClient::new(
        generation.api_key().clone(),
        generation.model().clone(),
        generation.base_url(),
        generation.provider().clone(),
    );
    let settings = GenerationSettings::builder()
        .model(Some(generation.model().clone()))
        .temperature(*generation.temperature())
        .max_tokens(*generation.max_tokens())
        .build()
        .map_err(anyhow::Error::new)?;

    let image = config.image();
    let images = ImageClient::new(
        image.api_key().clone(),
        image.base_url().clone(),
        image.fallback_url().clone(),
    );

    let state = AppState {
        content: ContentStore::new(pool.clone()),
        profiles: ProfileStore::new(pool),
        driver: Arc::new(driver),
        images: Arc::new(images),
        sessions: SessionVerifier::new(config.auth().session_secret()),
        generation: settings,
    };

    let router = create_router(state);
    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, "Ghostwriter listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down");
    ghostwriter_core::shutdown_observability();

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl+C");
    }
}
