//! Restaurant Commands

use crate::domain::catalog::RestaurantId;

/// 删除餐厅命令（级联删除其 Pairing）
#[derive(Debug, Clone)]
pub struct DeleteRestaurant {
    pub restaurant_id: RestaurantId,
}
