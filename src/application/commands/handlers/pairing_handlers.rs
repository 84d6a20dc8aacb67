//! Pairing Command Handlers

use std::sync::Arc;

use crate::application::commands::CreatePairing;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    PairingRepositoryPort, PizzaRepositoryPort, RepositoryError, RestaurantRepositoryPort,
};
use crate::application::views::PairingDetail;
use crate::domain::catalog::{validate_pairing_price, NewPairing};

/// CreatePairing Handler
///
/// 检查顺序固定：存在性检查 → 价格校验 → 事务插入。
/// 字段缺失的检查在进入此处之前完成。
pub struct CreatePairingHandler {
    restaurant_repo: Arc<dyn RestaurantRepositoryPort>,
    pizza_repo: Arc<dyn PizzaRepositoryPort>,
    pairing_repo: Arc<dyn PairingRepositoryPort>,
}

impl CreatePairingHandler {
    pub fn new(
        restaurant_repo: Arc<dyn RestaurantRepositoryPort>,
        pizza_repo: Arc<dyn PizzaRepositoryPort>,
        pairing_repo: Arc<dyn PairingRepositoryPort>,
    ) -> Self {
        Self {
            restaurant_repo,
            pizza_repo,
            pairing_repo,
        }
    }

    pub async fn handle(&self, command: CreatePairing) -> Result<PairingDetail, ApplicationError> {
        let pizza = self
            .pizza_repo
            .find_by_id(command.pizza_id)
            .await
            .map_err(reject)?;
        let restaurant = self
            .restaurant_repo
            .find_by_id(command.restaurant_id)
            .await
            .map_err(reject)?;

        let (pizza, restaurant) = match (pizza, restaurant) {
            (Some(pizza), Some(restaurant)) => (pizza, restaurant),
            _ => return Err(ApplicationError::not_found("Pizza or Restaurant")),
        };

        let price = validate_pairing_price(command.price)?;

        let pairing = self
            .pairing_repo
            .create(&NewPairing {
                price,
                pizza_id: pizza.id,
                restaurant_id: restaurant.id,
            })
            .await
            .map_err(reject)?;

        tracing::info!(
            pairing_id = %pairing.id(),
            pizza_id = %pizza.id,
            restaurant_id = %restaurant.id,
            price = pairing.price().value(),
            "Pairing created"
        );

        Ok(PairingDetail::new(&pairing, &pizza, &restaurant))
    }
}

fn reject(err: RepositoryError) -> ApplicationError {
    tracing::warn!(error = %err, "Pairing creation rolled back");
    ApplicationError::persistence_rejected()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::GENERIC_VALIDATION_MESSAGE;
    use crate::domain::catalog::{NewPizza, NewRestaurant, PizzaId, RestaurantId};
    use crate::infrastructure::persistence::sqlite::testing::{memory_pool, memory_repositories};
    use crate::infrastructure::persistence::sqlite::{
        SqlitePairingRepository, SqlitePizzaRepository, SqliteRestaurantRepository,
    };

    async fn setup() -> (CreatePairingHandler, Arc<SqlitePairingRepository>) {
        let (restaurants, pizzas, pairings) = memory_repositories().await;
        restaurants
            .save(&NewRestaurant::new("Karen's Pizza Shack", "address1"))
            .await
            .unwrap();
        pizzas
            .save(&NewPizza::new("Emma", "Dough, Tomato Sauce, Cheese"))
            .await
            .unwrap();

        let handler = CreatePairingHandler::new(restaurants, pizzas, pairings.clone());
        (handler, pairings)
    }

    fn command(price: i64, pizza_id: i64, restaurant_id: i64) -> CreatePairing {
        CreatePairing {
            price,
            pizza_id: PizzaId::new(pizza_id),
            restaurant_id: RestaurantId::new(restaurant_id),
        }
    }

    #[tokio::test]
    async fn test_create_returns_expanded_pairing() {
        let (handler, pairings) = setup().await;

        let detail = handler.handle(command(10, 1, 1)).await.unwrap();

        assert_eq!(detail.price.value(), 10);
        assert_eq!(detail.pizza.name, "Emma");
        assert_eq!(detail.restaurant.name, "Karen's Pizza Shack");
        assert_eq!(pairings.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_invalid_price_persists_nothing() {
        let (handler, pairings) = setup().await;

        for price in [0, 31, -1] {
            let err = handler.handle(command(price, 1, 1)).await.unwrap_err();
            assert_eq!(err.messages(), vec!["Price must be between 1 and 30"]);
        }
        assert_eq!(pairings.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_references_are_not_found() {
        let (handler, pairings) = setup().await;

        let err = handler.handle(command(10, 9999, 1)).await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound("Pizza or Restaurant")));

        let err = handler.handle(command(10, 1, 9999)).await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound("Pizza or Restaurant")));

        assert_eq!(pairings.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_existence_checked_before_price() {
        let (handler, _) = setup().await;

        let err = handler.handle(command(99, 9999, 9999)).await.unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_store_failure_is_generic_validation_error() {
        let pool = memory_pool().await;
        sqlx::query(
            r#"
            CREATE TRIGGER refuse_pairings BEFORE INSERT ON restaurant_pizzas
            BEGIN
                SELECT RAISE(ABORT, 'pairings are read-only');
            END
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        let restaurants = Arc::new(SqliteRestaurantRepository::new(pool.clone()));
        let pizzas = Arc::new(SqlitePizzaRepository::new(pool.clone()));
        let pairings = Arc::new(SqlitePairingRepository::new(pool));
        restaurants
            .save(&NewRestaurant::new("Karen's Pizza Shack", "address1"))
            .await
            .unwrap();
        pizzas
            .save(&NewPizza::new("Emma", "Dough, Tomato Sauce, Cheese"))
            .await
            .unwrap();
        let handler = CreatePairingHandler::new(restaurants, pizzas, pairings.clone());

        let err = handler.handle(command(5, 1, 1)).await.unwrap_err();

        assert_eq!(err.messages(), vec![GENERIC_VALIDATION_MESSAGE]);
        assert_eq!(pairings.count().await.unwrap(), 0);
    }
}
