//! HTTP Error Handling

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 单条错误响应：`{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// 校验错误响应：`{"errors": [...]}`
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 404
    NotFound(String),
    /// 400，可包含多条消息
    Validation(Vec<String>),
    /// 500，详情只写日志
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, Json(ErrorResponse { error: msg })).into_response()
            }
            ApiError::Validation(errors) => {
                tracing::warn!(errors = ?errors, "Validation failed");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorResponse { errors }),
                )
                    .into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound(_) => ApiError::NotFound(e.to_string()),
            ApplicationError::ValidationError(messages) => ApiError::Validation(messages),
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(vec![rejection.body_text()])
    }
}
