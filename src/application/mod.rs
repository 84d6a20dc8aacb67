//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Repository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - views: 响应投影（Summary / Detail）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod views;

// Re-exports
pub use commands::{
    handlers::{CreatePairingHandler, DeleteRestaurantHandler},
    CreatePairing, DeleteRestaurant,
};

pub use error::ApplicationError;

pub use ports::{
    PairingRepositoryPort, PizzaRepositoryPort, RepositoryError, RestaurantRepositoryPort,
};

pub use queries::{
    handlers::{GetPizzaHandler, GetRestaurantHandler, ListPizzasHandler, ListRestaurantsHandler},
    GetPizza, GetRestaurant, ListPizzas, ListRestaurants,
};

pub use views::{
    PairingDetail, PizzaDetail, PizzaPairing, PizzaSummary, RestaurantDetail, RestaurantPairing,
    RestaurantSummary,
};
