//! Cache HTTP Handlers

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::ClearCache;
use crate::infrastructure::http::dto::ClearCacheResponse;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 清空音频缓存
pub async fn clear_cache(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ClearCacheResponse>, ApiError> {
    let result = state.clear_cache_handler.handle(ClearCache).await?;

    Ok(Json(ClearCacheResponse {
        status: "ok",
        cleared: result.cleared,
        message: format!("Cleared {} cached files", result.cleared),
    }))
}
