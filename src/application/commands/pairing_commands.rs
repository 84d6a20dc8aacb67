//! Pairing Commands

use crate::domain::catalog::{PizzaId, RestaurantId};

/// 创建定价关联命令
///
/// price 尚未校验，校验发生在存在性检查之后。
#[derive(Debug, Clone)]
pub struct CreatePairing {
    pub price: i64,
    pub pizza_id: PizzaId,
    pub restaurant_id: RestaurantId,
}
