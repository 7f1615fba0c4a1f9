//! HTTP Routes
//!
//! API Endpoints:
//! - /              GET   服务信息
//! - /health        GET   健康检查（缓存状态、合成服务连通性）
//! - /voices        GET   音色目录
//! - /synthesize    POST  合成语音
//! - /tts           POST  合成语音（别名）
//! - /clear-cache   POST  清空音频缓存

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::service_info))
        .route("/health", get(handlers::health))
        .route("/voices", get(handlers::list_voices))
        .route("/synthesize", post(handlers::synthesize))
        .route("/tts", post(handlers::synthesize))
        .route("/clear-cache", post(handlers::clear_cache))
}
