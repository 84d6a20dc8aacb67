//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Catalog Context: 餐厅、披萨及其定价关联

pub mod catalog;
