// ABOUTME: HTTP request handlers for AI settings
// ABOUTME: Masked read of the stored settings and validated partial writes

use axum::{body::Bytes, extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ApiResult, AppError};
use crate::AppState;
use linkdesk_settings::{SaveSettingsRequest, SettingsPatch, SettingsResponse};

#[derive(Debug, Serialize)]
pub struct SaveSettingsResponse {
    pub success: bool,
    pub message: String,
}

/// Get AI settings with the API key masked
pub async fn get_ai_settings(State(state): State<AppState>) -> ApiResult<Json<SettingsResponse>> {
    info!("Getting AI settings");

    let response = state.settings_storage.load().await?;
    Ok(Json(response))
}

/// Save AI settings. Only the fields present in the body are changed.
///
/// The body is parsed as JSON whatever its `Content-Type`.
pub async fn save_ai_settings(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<SaveSettingsResponse>> {
    let request: SaveSettingsRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::bad_request(format!("Invalid request body: {}", e)))?;
    info!("Saving AI settings");
    debug!(?request, "Settings request");

    let patch = SettingsPatch::from_request(request, Utc::now())?;
    let outcome = state.settings_storage.save(&patch).await?;
    debug!(?outcome, "Settings saved");

    Ok(Json(SaveSettingsResponse {
        success: true,
        message: "Settings saved".to_string(),
    }))
}
