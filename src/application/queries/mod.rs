//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod pizza_queries;
mod restaurant_queries;

pub mod handlers;

pub use pizza_queries::*;
pub use restaurant_queries::*;
