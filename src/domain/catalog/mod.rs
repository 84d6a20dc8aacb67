//! Catalog Context - 餐厅/披萨目录限界上下文
//!
//! 职责:
//! - Restaurant / Pizza 实体
//! - Pairing（餐厅-披萨定价关联）及价格校验

mod entities;
mod errors;
mod value_objects;

pub use entities::{NewPairing, NewPizza, NewRestaurant, Pairing, Pizza, Restaurant};
pub use errors::CatalogError;
pub use value_objects::{
    validate_pairing_price, PairingId, PizzaId, Price, RestaurantId, MAX_PRICE, MIN_PRICE,
};
