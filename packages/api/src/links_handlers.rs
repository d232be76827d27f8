// ABOUTME: HTTP handler exposing the link classifiers
// ABOUTME: Reports every predicate for a URL and/or a link label

use axum::{
    extract::{rejection::QueryRejection, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiResult, AppError};
use linkdesk_links::{classify_text, classify_url, TextReport, UrlReport};

#[derive(Debug, Deserialize)]
pub struct ClassifyQuery {
    pub url: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<UrlReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextReport>,
}

pub async fn classify(
    query: Result<Query<ClassifyQuery>, QueryRejection>,
) -> ApiResult<Json<ClassifyResponse>> {
    let Query(query) = query?;

    if query.url.is_none() && query.text.is_none() {
        return Err(AppError::bad_request("Provide a url or text parameter"));
    }

    Ok(Json(ClassifyResponse {
        url: query.url.as_deref().map(classify_url),
        text: query.text.as_deref().map(classify_text),
    }))
}
