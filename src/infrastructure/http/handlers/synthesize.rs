//! Synthesize HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderName},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::application::SynthesizeSpeech;
use crate::infrastructure::http::dto::SynthesizeRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub const X_CACHE: HeaderName = HeaderName::from_static("x-cache");
pub const X_FINGERPRINT: HeaderName = HeaderName::from_static("x-fingerprint");

/// 合成语音，`/synthesize` 和 `/tts` 共用
pub async fn synthesize(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SynthesizeRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;

    let result = state
        .synthesize_handler
        .handle(SynthesizeSpeech::from(req))
        .await?;

    let headers = [
        (header::CONTENT_TYPE, result.format.mime_type().to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("inline; filename=speech.{}", result.format.extension()),
        ),
        (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
        (
            X_CACHE,
            if result.cache_hit { "HIT" } else { "MISS" }.to_string(),
        ),
        (X_FINGERPRINT, result.fingerprint.to_string()),
    ];

    Ok((headers, result.audio_data).into_response())
}
