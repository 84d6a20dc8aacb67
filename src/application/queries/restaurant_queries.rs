//! Restaurant Queries

use crate::domain::catalog::RestaurantId;

/// 获取餐厅详情（含 Pairing）查询
#[derive(Debug, Clone)]
pub struct GetRestaurant {
    pub restaurant_id: RestaurantId,
}

/// 列出所有餐厅查询
#[derive(Debug, Clone)]
pub struct ListRestaurants;
