use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::Json;
use orglens_common::Classification;
use serde::Deserialize;
use url::Url;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// Absolute URL of the page to classify; relative or malformed values
    /// are rejected during deserialization, before any network access.
    pub url: Url,
}

/// `POST /classify` — fetch, normalize, extract, classify.
///
/// The token check runs before the pipeline, so a rejected request performs
/// no outbound calls.
pub async fn classify(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<Classification>, ApiError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if token != state.secret {
        tracing::warn!(host = req.url.domain().unwrap_or("-"), "auth.rejected");
        return Err(ApiError::Unauthorized);
    }

    let result = state.pipeline.classify_url(&req.url).await.map_err(|e| {
        tracing::warn!(
            host = req.url.domain().unwrap_or("-"),
            error = %e,
            "classify.failed"
        );
        ApiError::Processing
    })?;

    Ok(Json(result))
}
