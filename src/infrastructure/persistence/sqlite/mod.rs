//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod pairing_repo;
mod pizza_repo;
mod restaurant_repo;
mod seed;

pub use database::*;
pub use pairing_repo::*;
pub use pizza_repo::*;
pub use restaurant_repo::*;
pub use seed::*;
