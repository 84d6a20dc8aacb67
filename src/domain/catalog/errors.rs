//! Catalog Context - Errors

use thiserror::Error;

use super::value_objects::{MAX_PRICE, MIN_PRICE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Price must be between {} and {}", MIN_PRICE, MAX_PRICE)]
    InvalidPrice(i64),
}
