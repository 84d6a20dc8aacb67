//! Catalog Context - Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CatalogError, PairingId, PizzaId, Price, RestaurantId};

/// 餐厅
///
/// 拥有其全部 Pairing：删除餐厅时级联删除这些关联。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
}

/// 待插入的餐厅（id 由存储层分配）
#[derive(Debug, Clone)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
}

impl NewRestaurant {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// 披萨
///
/// 仅被 Pairing 引用，不拥有它们。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: PizzaId,
    pub name: String,
    pub ingredients: String,
}

#[derive(Debug, Clone)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}

impl NewPizza {
    pub fn new(name: impl Into<String>, ingredients: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
        }
    }
}

/// 待插入的定价关联
///
/// price 的类型保证了它已通过校验。
#[derive(Debug, Clone)]
pub struct NewPairing {
    pub price: Price,
    pub pizza_id: PizzaId,
    pub restaurant_id: RestaurantId,
}

/// 餐厅-披萨定价关联
///
/// 不变量:
/// - price 始终在 [MIN_PRICE, MAX_PRICE] 内
/// - updated_at 在第一次修改前为 None
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    id: PairingId,
    price: Price,
    pizza_id: PizzaId,
    restaurant_id: RestaurantId,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Pairing {
    /// 从存储层还原
    pub fn restore(
        id: PairingId,
        price: Price,
        pizza_id: PizzaId,
        restaurant_id: RestaurantId,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            price,
            pizza_id,
            restaurant_id,
            created_at,
            updated_at,
        }
    }

    /// 修改价格，重新校验并记录修改时间
    pub fn reprice(&mut self, price: i64) -> Result<(), CatalogError> {
        self.price = Price::new(price)?;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    // Getters
    pub fn id(&self) -> PairingId {
        self.id
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn pizza_id(&self) -> PizzaId {
        self.pizza_id
    }

    pub fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pairing() -> Pairing {
        Pairing::restore(
            PairingId::new(1),
            Price::new(10).unwrap(),
            PizzaId::new(2),
            RestaurantId::new(3),
            Utc::now(),
            None,
        )
    }

    #[test]
    fn test_reprice_stamps_updated_at() {
        let mut pairing = sample_pairing();
        assert!(pairing.updated_at().is_none());

        pairing.reprice(12).unwrap();
        assert_eq!(pairing.price().value(), 12);
        assert!(pairing.updated_at().is_some());
    }

    #[test]
    fn test_reprice_rejects_invalid_price_without_mutation() {
        let mut pairing = sample_pairing();

        let err = pairing.reprice(31).unwrap_err();
        assert_eq!(err, CatalogError::InvalidPrice(31));
        assert_eq!(pairing.price().value(), 10);
        assert!(pairing.updated_at().is_none());
    }
}
