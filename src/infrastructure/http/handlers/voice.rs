//! Voice HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ListVoices;
use crate::infrastructure::http::dto::{VoiceListResponse, VoiceResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出合成服务支持的音色
pub async fn list_voices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<VoiceListResponse>, ApiError> {
    let voices: Vec<VoiceResponse> = state
        .list_voices_handler
        .handle(ListVoices)
        .await?
        .into_iter()
        .map(VoiceResponse::from)
        .collect();

    Ok(Json(VoiceListResponse {
        count: voices.len(),
        voices,
    }))
}
