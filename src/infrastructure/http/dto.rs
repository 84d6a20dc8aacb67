//! Data Transfer Objects

use serde_json::{Map, Value};

use crate::application::CreatePairing;
use crate::domain::catalog::{PizzaId, RestaurantId};

use super::error::ApiError;

const REQUIRED_FIELDS: [&str; 3] = ["price", "pizza_id", "restaurant_id"];

/// `POST /restaurant_pizzas` 请求体
///
/// 保留原始 JSON 对象：先检查字段是否存在，再做类型转换，
/// 这样类型错误不会掩盖缺失字段。非对象的请求体视为所有字段缺失。
#[derive(Debug, Default)]
pub struct CreatePairingRequest {
    fields: Map<String, Value>,
}

impl From<Value> for CreatePairingRequest {
    fn from(body: Value) -> Self {
        match body {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }
}

impl CreatePairingRequest {
    /// 检查必填字段，列出全部缺失项；随后列出全部类型错误
    pub fn into_command(self) -> Result<CreatePairing, ApiError> {
        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|name| self.field(name).is_none())
            .map(|name| format!("{} is required", name))
            .collect();
        if !missing.is_empty() {
            return Err(ApiError::Validation(missing));
        }

        match (
            self.integer("price"),
            self.integer("pizza_id"),
            self.integer("restaurant_id"),
        ) {
            (Ok(price), Ok(pizza_id), Ok(restaurant_id)) => Ok(CreatePairing {
                price,
                pizza_id: PizzaId::new(pizza_id),
                restaurant_id: RestaurantId::new(restaurant_id),
            }),
            (price, pizza_id, restaurant_id) => Err(ApiError::Validation(
                [price.err(), pizza_id.err(), restaurant_id.err()]
                    .into_iter()
                    .flatten()
                    .collect(),
            )),
        }
    }

    /// null 等同于缺失
    fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).filter(|value| !value.is_null())
    }

    fn integer(&self, name: &str) -> Result<i64, String> {
        self.field(name)
            .and_then(Value::as_i64)
            .ok_or_else(|| format!("{} must be an integer", name))
    }
}
