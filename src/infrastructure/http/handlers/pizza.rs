//! Pizza HTTP Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::application::{GetPizza, ListPizzas, PizzaDetail, PizzaSummary};
use crate::domain::catalog::PizzaId;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取披萨列表
pub async fn list_pizzas(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PizzaSummary>>, ApiError> {
    let result = state.list_pizzas_handler.handle(ListPizzas).await?;
    Ok(Json(result))
}

/// 获取披萨详情（含售卖它的餐厅）
pub async fn get_pizza(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<PizzaDetail>, ApiError> {
    let query = GetPizza {
        pizza_id: PizzaId::new(id),
    };

    let result = state.get_pizza_handler.handle(query).await?;

    Ok(Json(result))
}
