//! Pizza Queries

use crate::domain::catalog::PizzaId;

/// 获取披萨详情（含售卖它的餐厅）查询
#[derive(Debug, Clone)]
pub struct GetPizza {
    pub pizza_id: PizzaId,
}

/// 列出所有披萨查询
#[derive(Debug, Clone)]
pub struct ListPizzas;
