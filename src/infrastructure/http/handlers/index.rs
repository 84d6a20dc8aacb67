//! Index Handler

use axum::response::Html;

/// 根路径说明页
pub async fn index() -> Html<&'static str> {
    Html("<h1>Pizza Restaurants API</h1>")
}
