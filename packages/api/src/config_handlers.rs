// ABOUTME: HTTP handler for the resolved runtime configuration
// ABOUTME: Scraper service endpoints and the fixed timing constants

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;
use linkdesk_config::Timings;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointsView {
    pub base_url: String,
    pub hubcloud_port: u16,
    pub timer_port: u16,
    pub hubcloud_api: String,
    pub timer_api: String,
}

#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub endpoints: EndpointsView,
    pub timings: Timings,
}

pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let endpoints = &state.endpoints;

    Json(ConfigResponse {
        endpoints: EndpointsView {
            base_url: endpoints.base_url.clone(),
            hubcloud_port: endpoints.hubcloud_port,
            timer_port: endpoints.timer_port,
            hubcloud_api: endpoints.hubcloud_api(),
            timer_api: endpoints.timer_api(),
        },
        timings: Timings::current(),
    })
}
