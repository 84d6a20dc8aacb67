//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::{
    NewPairing, NewPizza, NewRestaurant, Pairing, Pizza, PizzaId, Restaurant, RestaurantId,
};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Restaurant Repository
// ============================================================================

/// Restaurant Repository Port
#[async_trait]
pub trait RestaurantRepositoryPort: Send + Sync {
    /// 插入餐厅，返回带 id 的实体
    async fn save(&self, restaurant: &NewRestaurant) -> Result<Restaurant, RepositoryError>;

    /// 根据 ID 查找餐厅
    async fn find_by_id(&self, id: RestaurantId) -> Result<Option<Restaurant>, RepositoryError>;

    /// 获取所有餐厅
    async fn find_all(&self) -> Result<Vec<Restaurant>, RepositoryError>;

    /// 在同一事务内删除餐厅及其全部 Pairing
    ///
    /// 返回餐厅是否存在
    async fn delete_cascade(&self, id: RestaurantId) -> Result<bool, RepositoryError>;
}

// ============================================================================
// Pizza Repository
// ============================================================================

/// Pizza Repository Port
#[async_trait]
pub trait PizzaRepositoryPort: Send + Sync {
    async fn save(&self, pizza: &NewPizza) -> Result<Pizza, RepositoryError>;

    async fn find_by_id(&self, id: PizzaId) -> Result<Option<Pizza>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<Pizza>, RepositoryError>;
}

// ============================================================================
// Pairing Repository
// ============================================================================

/// Pairing Repository Port
#[async_trait]
pub trait PairingRepositoryPort: Send + Sync {
    /// 在事务内插入 Pairing；任何错误都会回滚
    async fn create(&self, pairing: &NewPairing) -> Result<Pairing, RepositoryError>;

    /// 餐厅的全部 Pairing，连同各自的披萨
    async fn find_by_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<(Pairing, Pizza)>, RepositoryError>;

    /// 披萨的全部 Pairing，连同各自的餐厅
    async fn find_by_pizza(
        &self,
        pizza_id: PizzaId,
    ) -> Result<Vec<(Pairing, Restaurant)>, RepositoryError>;
}
