//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::domain::catalog::CatalogError;

/// 持久化失败时对外暴露的通用校验消息
pub const GENERIC_VALIDATION_MESSAGE: &str = "Validation errors";

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到（如 "Restaurant"、"Pizza or Restaurant"）
    #[error("{0} not found")]
    NotFound(&'static str),

    /// 验证错误，可包含多条消息
    #[error("Validation error: {}", .0.join("; "))]
    ValidationError(Vec<String>),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound(resource)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(vec![message.into()])
    }

    /// 持久化失败：不区分具体原因，统一按校验错误返回
    pub fn persistence_rejected() -> Self {
        Self::validation(GENERIC_VALIDATION_MESSAGE)
    }

    /// 错误消息列表（用于 `{"errors": [...]}`）
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::ValidationError(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl From<crate::application::ports::RepositoryError> for ApplicationError {
    fn from(err: crate::application::ports::RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

impl From<CatalogError> for ApplicationError {
    fn from(err: CatalogError) -> Self {
        Self::validation(err.to_string())
    }
}
