//! Catalog Context - Value Objects

use serde::{Deserialize, Serialize};

use super::CatalogError;

/// 最低价格（含）
pub const MIN_PRICE: i64 = 1;

/// 最高价格（含）
pub const MAX_PRICE: i64 = 30;

macro_rules! integer_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

integer_id!(
    /// 餐厅标识（由存储层分配）
    RestaurantId
);

integer_id!(
    /// 披萨标识
    PizzaId
);

integer_id!(
    /// 定价关联标识
    PairingId
);

/// 定价关联的价格
///
/// 不变量:
/// - MIN_PRICE <= value <= MAX_PRICE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    pub fn new(value: i64) -> Result<Self, CatalogError> {
        if !(MIN_PRICE..=MAX_PRICE).contains(&value) {
            return Err(CatalogError::InvalidPrice(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Price {
    type Error = CatalogError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// 校验定价关联的价格
///
/// 必须在任何写入之前调用；失败时不应产生任何持久化副作用。
pub fn validate_pairing_price(price: i64) -> Result<Price, CatalogError> {
    Price::new(price)
}
