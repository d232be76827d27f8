// ABOUTME: Server bootstrap for Linkdesk
// ABOUTME: Wires configuration, the document store and the API router into an axum server

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod classify;
pub mod config;

#[cfg(test)]
mod tests;

use config::Config;
use linkdesk_config::constants;
use linkdesk_api::{create_router, AppState};
use linkdesk_settings::AiSettingsStorage;
use linkdesk_storage::{SqliteDocumentStore, StorageConfig};

/// Log filter from `RUST_LOG`, `info` when unset or invalid
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(constants::RUST_LOG).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global tracing subscriber
pub fn init_tracing() {
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();
}

pub async fn run_server(port_override: Option<u16>) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    if let Some(port) = port_override {
        config.port = port;
    }

    info!("Opening database at {}", config.database_path.display());
    let store = SqliteDocumentStore::open(&StorageConfig::at(&config.database_path)).await?;
    let settings_storage = AiSettingsStorage::new(Arc::new(store));

    let state = AppState::new(settings_storage, config.endpoints.clone());

    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("CORS origin: {}", config.cors_origin);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
