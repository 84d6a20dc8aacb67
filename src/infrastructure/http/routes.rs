//! HTTP Routes
//!
//! API Endpoints:
//! - /                        GET     说明页
//! - /restaurants             GET     列出所有餐厅
//! - /restaurants/:id         GET     餐厅详情（含 restaurant_pizzas）
//! - /restaurants/:id         DELETE  删除餐厅（级联删除 Pairing）
//! - /pizzas                  GET     列出所有披萨
//! - /pizzas/:id              GET     披萨详情（含 restaurant_pizzas）
//! - /restaurant_pizzas       POST    创建定价关联

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
        .route("/", get(handlers::index))
        .merge(restaurant_routes())
        .merge(pizza_routes())
        .route("/restaurant_pizzas", post(handlers::create_pairing))
}

/// Restaurant 路由
fn restaurant_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/restaurants", get(handlers::list_restaurants))
        .route(
            "/restaurants/:id",
            get(handlers::get_restaurant).delete(handlers::delete_restaurant),
        )
}

/// Pizza 路由
fn pizza_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/pizzas", get(handlers::list_pizzas))
        .route("/pizzas/:id", get(handlers::get_pizza))
}
