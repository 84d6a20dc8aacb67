//! Pizzeria - 餐厅/披萨目录 API
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Catalog Context: Restaurant、Pizza、Pairing 及价格校验
//!
//! 应用层 (application/):
//! - Ports: Repository 端口定义
//! - Commands: 删除餐厅、创建定价关联
//! - Queries: 餐厅/披萨的列表与详情
//! - Views: Summary / Detail 响应投影
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
