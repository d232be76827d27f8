// ABOUTME: HTTP API layer for Linkdesk providing REST endpoints and routing
// ABOUTME: Integration layer over the settings, links and config packages

use axum::{routing::get, Router};

use linkdesk_config::ServiceEndpoints;
use linkdesk_settings::AiSettingsStorage;

pub mod ai_settings_handlers;
pub mod config_handlers;
pub mod error;
pub mod health;
pub mod links_handlers;


pub use error::{ApiResult, AppError};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub settings_storage: AiSettingsStorage,
    pub endpoints: ServiceEndpoints,
}

impl AppState {
    pub fn new(settings_storage: AiSettingsStorage, endpoints: ServiceEndpoints) -> Self {
        Self {
            settings_storage,
            endpoints,
        }
    }
}

/// Creates the full API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route(
            "/api/ai/settings",
            get(ai_settings_handlers::get_ai_settings).post(ai_settings_handlers::save_ai_settings),
        )
        .route("/api/links/classify", get(links_handlers::classify))
        .route("/api/config", get(config_handlers::get_config))
        .with_state(state)
}
