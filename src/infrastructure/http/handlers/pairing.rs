//! Pairing HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use serde_json::Value;

use crate::application::PairingDetail;
use crate::infrastructure::http::dto::CreatePairingRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 创建餐厅-披萨定价关联
///
/// 字段缺失 → 400；类型错误 → 400；引用不存在 → 404；价格越界 → 400
pub async fn create_pairing(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<PairingDetail>), ApiError> {
    let Json(body) = payload?;
    let command = CreatePairingRequest::from(body).into_command()?;

    let result = state.create_pairing_handler.handle(command).await?;

    Ok((StatusCode::CREATED, Json(result)))
}
