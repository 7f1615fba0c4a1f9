//! HTTP Middleware
//!
//! - 请求 ID：每个响应带 `x-request-id`
//! - 错误日志：4xx/5xx 响应记录方法、URI、状态码和耗时

use axum::{
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use uuid::Uuid;

pub const X_REQUEST_ID: &str = "x-request-id";

/// 请求 ID，存放在 request extensions 中
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// 为每个请求生成 ID 并写入响应头
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let mut response = next.run(request).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(X_REQUEST_ID, header_value);
    }

    response
}

/// HTTP 状态码错误日志中间件
///
/// 错误详情在 ApiError::into_response() 中记录，这里只记录请求层面的信息
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            latency_ms = latency_ms,
            request_id = %request_id,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            latency_ms = latency_ms,
            request_id = %request_id,
            "HTTP client error"
        );
    }

    response
}
