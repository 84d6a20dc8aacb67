//! Read Views - 响应投影
//!
//! 每个实体有两种投影：
//! - Summary: 只包含自身标量字段
//! - Detail: 展开一层关系，关联方一律使用其 Summary
//!
//! 关系只展开一层，且展开方向固定，因此不存在循环引用。

use serde::Serialize;

use crate::domain::catalog::{
    Pairing, PairingId, Pizza, PizzaId, Price, Restaurant, RestaurantId,
};

// ============================================================================
// Summary views
// ============================================================================

/// `{id, name, address}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantSummary {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
}

impl From<&Restaurant> for RestaurantSummary {
    fn from(restaurant: &Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name.clone(),
            address: restaurant.address.clone(),
        }
    }
}

/// `{id, name, ingredients}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PizzaSummary {
    pub id: PizzaId,
    pub name: String,
    pub ingredients: String,
}

impl From<&Pizza> for PizzaSummary {
    fn from(pizza: &Pizza) -> Self {
        Self {
            id: pizza.id,
            name: pizza.name.clone(),
            ingredients: pizza.ingredients.clone(),
        }
    }
}

// ============================================================================
// Pairing views (direction-tagged)
// ============================================================================

/// 从餐厅一侧看到的 Pairing：只嵌入披萨
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantPairing {
    pub id: PairingId,
    pub price: Price,
    pub pizza_id: PizzaId,
    pub restaurant_id: RestaurantId,
    pub pizza: PizzaSummary,
}

impl RestaurantPairing {
    pub fn new(pairing: &Pairing, pizza: &Pizza) -> Self {
        Self {
            id: pairing.id(),
            price: pairing.price(),
            pizza_id: pairing.pizza_id(),
            restaurant_id: pairing.restaurant_id(),
            pizza: PizzaSummary::from(pizza),
        }
    }
}

/// 从披萨一侧看到的 Pairing：只嵌入餐厅
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PizzaPairing {
    pub id: PairingId,
    pub price: Price,
    pub pizza_id: PizzaId,
    pub restaurant_id: RestaurantId,
    pub restaurant: RestaurantSummary,
}

impl PizzaPairing {
    pub fn new(pairing: &Pairing, restaurant: &Restaurant) -> Self {
        Self {
            id: pairing.id(),
            price: pairing.price(),
            pizza_id: pairing.pizza_id(),
            restaurant_id: pairing.restaurant_id(),
            restaurant: RestaurantSummary::from(restaurant),
        }
    }
}

/// Pairing 自身的展开视图：两侧都以 Summary 嵌入
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairingDetail {
    pub id: PairingId,
    pub price: Price,
    pub pizza_id: PizzaId,
    pub pizza: PizzaSummary,
    pub restaurant_id: RestaurantId,
    pub restaurant: RestaurantSummary,
}

impl PairingDetail {
    pub fn new(pairing: &Pairing, pizza: &Pizza, restaurant: &Restaurant) -> Self {
        Self {
            id: pairing.id(),
            price: pairing.price(),
            pizza_id: pairing.pizza_id(),
            pizza: PizzaSummary::from(pizza),
            restaurant_id: pairing.restaurant_id(),
            restaurant: RestaurantSummary::from(restaurant),
        }
    }
}

// ============================================================================
// Expanded entity views
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantDetail {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<RestaurantPairing>,
}

impl RestaurantDetail {
    pub fn new(restaurant: &Restaurant, pairings: &[(Pairing, Pizza)]) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name.clone(),
            address: restaurant.address.clone(),
            restaurant_pizzas: pairings
                .iter()
                .map(|(pairing, pizza)| RestaurantPairing::new(pairing, pizza))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PizzaDetail {
    pub id: PizzaId,
    pub name: String,
    pub ingredients: String,
    pub restaurant_pizzas: Vec<PizzaPairing>,
}

impl PizzaDetail {
    pub fn new(pizza: &Pizza, pairings: &[(Pairing, Restaurant)]) -> Self {
        Self {
            id: pizza.id,
            name: pizza.name.clone(),
            ingredients: pizza.ingredients.clone(),
            restaurant_pizzas: pairings
                .iter()
                .map(|(pairing, restaurant)| PizzaPairing::new(pairing, restaurant))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn restaurant() -> Restaurant {
        Restaurant {
            id: RestaurantId::new(1),
            name: "Karen's Pizza Shack".to_string(),
            address: "address1".to_string(),
        }
    }

    fn pizza() -> Pizza {
        Pizza {
            id: PizzaId::new(2),
            name: "Emma".to_string(),
            ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
        }
    }

    fn pairing() -> Pairing {
        Pairing::restore(
            PairingId::new(3),
            Price::new(10).unwrap(),
            PizzaId::new(2),
            RestaurantId::new(1),
            Utc::now(),
            None,
        )
    }

    #[test]
    fn test_restaurant_summary_has_no_relationships() {
        let value = serde_json::to_value(RestaurantSummary::from(&restaurant())).unwrap();
        assert_eq!(
            value,
            json!({"id": 1, "name": "Karen's Pizza Shack", "address": "address1"})
        );
    }

    #[test]
    fn test_restaurant_detail_embeds_pizza_summary_only() {
        let detail = RestaurantDetail::new(&restaurant(), &[(pairing(), pizza())]);
        let value = serde_json::to_value(detail).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Karen's Pizza Shack",
                "address": "address1",
                "restaurant_pizzas": [{
                    "id": 3,
                    "price": 10,
                    "pizza_id": 2,
                    "restaurant_id": 1,
                    "pizza": {"id": 2, "name": "Emma", "ingredients": "Dough, Tomato Sauce, Cheese"}
                }]
            })
        );
    }

    #[test]
    fn test_pizza_detail_embeds_restaurant_summary_only() {
        let detail = PizzaDetail::new(&pizza(), &[(pairing(), restaurant())]);
        let value = serde_json::to_value(detail).unwrap();

        let nested = &value["restaurant_pizzas"][0];
        assert!(nested.get("pizza").is_none());
        assert!(nested["restaurant"].get("restaurant_pizzas").is_none());
        assert_eq!(nested["restaurant"]["name"], "Karen's Pizza Shack");
    }

    #[test]
    fn test_pairing_detail_does_not_embed_collections() {
        let detail = PairingDetail::new(&pairing(), &pizza(), &restaurant());
        let value = serde_json::to_value(detail).unwrap();

        assert_eq!(value["price"], 10);
        assert!(value["pizza"].get("restaurant_pizzas").is_none());
        assert!(value["restaurant"].get("restaurant_pizzas").is_none());
    }
}
