//! Status Handlers - 服务信息和健康检查

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::GetHealth;
use crate::infrastructure::http::dto::{HealthResponse, ServiceInfoResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::{AppState, SERVICE_NAME};

/// 服务信息
pub async fn service_info() -> Json<ServiceInfoResponse> {
    Json(ServiceInfoResponse {
        status: "running",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        endpoints: vec![
            "GET /",
            "GET /health",
            "GET /voices",
            "POST /synthesize",
            "POST /tts",
            "POST /clear-cache",
        ],
    })
}

/// 健康检查：缓存目录状态和合成服务连通性
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, ApiError> {
    let report = state.get_health_handler.handle(GetHealth).await?;
    Ok(Json(HealthResponse::from_report(SERVICE_NAME, report)))
}
