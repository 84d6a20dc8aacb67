//! Restaurant Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{PairingRepositoryPort, RestaurantRepositoryPort};
use crate::application::queries::{GetRestaurant, ListRestaurants};
use crate::application::views::{RestaurantDetail, RestaurantSummary};

/// GetRestaurant Handler
pub struct GetRestaurantHandler {
    restaurant_repo: Arc<dyn RestaurantRepositoryPort>,
    pairing_repo: Arc<dyn PairingRepositoryPort>,
}

impl GetRestaurantHandler {
    pub fn new(
        restaurant_repo: Arc<dyn RestaurantRepositoryPort>,
        pairing_repo: Arc<dyn PairingRepositoryPort>,
    ) -> Self {
        Self {
            restaurant_repo,
            pairing_repo,
        }
    }

    pub async fn handle(&self, query: GetRestaurant) -> Result<RestaurantDetail, ApplicationError> {
        let restaurant = self
            .restaurant_repo
            .find_by_id(query.restaurant_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Restaurant"))?;

        let pairings = self.pairing_repo.find_by_restaurant(restaurant.id).await?;

        Ok(RestaurantDetail::new(&restaurant, &pairings))
    }
}

/// ListRestaurants Handler
pub struct ListRestaurantsHandler {
    restaurant_repo: Arc<dyn RestaurantRepositoryPort>,
}

impl ListRestaurantsHandler {
    pub fn new(restaurant_repo: Arc<dyn RestaurantRepositoryPort>) -> Self {
        Self { restaurant_repo }
    }

    pub async fn handle(
        &self,
        _query: ListRestaurants,
    ) -> Result<Vec<RestaurantSummary>, ApplicationError> {
        let restaurants = self.restaurant_repo.find_all().await?;
        Ok(restaurants.iter().map(RestaurantSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::PizzaRepositoryPort;
    use crate::domain::catalog::{NewPairing, NewPizza, NewRestaurant, Price, RestaurantId};
    use crate::infrastructure::persistence::sqlite::testing::memory_repositories;

    #[tokio::test]
    async fn test_get_restaurant_includes_pairings() {
        let (restaurants, pizzas, pairings) = memory_repositories().await;
        let restaurant = restaurants
            .save(&NewRestaurant::new("Karen's Pizza Shack", "address1"))
            .await
            .unwrap();
        let emma = pizzas.save(&NewPizza::new("Emma", "Dough")).await.unwrap();
        let geri = pizzas.save(&NewPizza::new("Geri", "Cheese")).await.unwrap();
        for (pizza, price) in [(&emma, 1), (&geri, 30)] {
            pairings
                .create(&NewPairing {
                    price: Price::new(price).unwrap(),
                    pizza_id: pizza.id,
                    restaurant_id: restaurant.id,
                })
                .await
                .unwrap();
        }

        let handler = GetRestaurantHandler::new(restaurants, pairings);
        let detail = handler
            .handle(GetRestaurant {
                restaurant_id: restaurant.id,
            })
            .await
            .unwrap();

        assert_eq!(detail.restaurant_pizzas.len(), 2);
        let names: Vec<_> = detail
            .restaurant_pizzas
            .iter()
            .map(|p| p.pizza.name.as_str())
            .collect();
        assert!(names.contains(&"Emma"));
        assert!(names.contains(&"Geri"));
    }

    #[tokio::test]
    async fn test_get_unknown_restaurant_is_not_found() {
        let (restaurants, _, pairings) = memory_repositories().await;
        let handler = GetRestaurantHandler::new(restaurants, pairings);

        let err = handler
            .handle(GetRestaurant {
                restaurant_id: RestaurantId::new(42),
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Restaurant not found");
    }

    #[tokio::test]
    async fn test_list_restaurants_returns_summaries() {
        let (restaurants, _, _) = memory_repositories().await;
        restaurants
            .save(&NewRestaurant::new("Sanjay's Pizza", "address2"))
            .await
            .unwrap();
        restaurants
            .save(&NewRestaurant::new("Kiki's Pizza", "address3"))
            .await
            .unwrap();

        let handler = ListRestaurantsHandler::new(restaurants);
        let list = handler.handle(ListRestaurants).await.unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].name, "Sanjay's Pizza");
        assert_eq!(list[1].address, "address3");
    }
}
