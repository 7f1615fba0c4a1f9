//! HTTP Error Handling
//!
//! 错误统一渲染为 `{"error": "...", "type": "..."}`，并使用真实的 HTTP 状态码

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 调用方输入错误 (400)
    BadRequest { kind: &'static str, message: String },
    /// 服务端或下游错误 (500)
    Internal { kind: &'static str, message: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            kind: "ValidationError",
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let response = match self {
            ApiError::BadRequest { kind, message } => {
                tracing::warn!(kind = kind, error = %message, "Bad request");
                ErrorResponse { error: message, kind }
            }
            ApiError::Internal { kind, message } => {
                tracing::error!(kind = kind, error = %message, "Internal server error");
                ErrorResponse { error: message, kind }
            }
        };

        (status, Json(response)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        let kind = e.kind();
        if e.is_client_error() {
            ApiError::BadRequest {
                kind,
                message: e.to_string(),
            }
        } else {
            ApiError::Internal {
                kind,
                message: e.to_string(),
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::bad_request(format!("Invalid JSON body: {}", e.body_text()))
    }
}
