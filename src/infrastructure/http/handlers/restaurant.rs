//! Restaurant HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{
    DeleteRestaurant, GetRestaurant, ListRestaurants, RestaurantDetail, RestaurantSummary,
};
use crate::domain::catalog::RestaurantId;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取餐厅列表（不含 Pairing）
pub async fn list_restaurants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RestaurantSummary>>, ApiError> {
    let result = state.list_restaurants_handler.handle(ListRestaurants).await?;
    Ok(Json(result))
}

/// 获取餐厅详情（含 Pairing 及其披萨）
pub async fn get_restaurant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<RestaurantDetail>, ApiError> {
    let query = GetRestaurant {
        restaurant_id: RestaurantId::new(id),
    };

    let result = state.get_restaurant_handler.handle(query).await?;

    Ok(Json(result))
}

/// 删除餐厅，级联删除其 Pairing
pub async fn delete_restaurant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let command = DeleteRestaurant {
        restaurant_id: RestaurantId::new(id),
    };

    state.delete_restaurant_handler.handle(command).await?;

    Ok(StatusCode::NO_CONTENT)
}
