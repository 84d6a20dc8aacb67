//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreatePairingHandler, DeleteRestaurantHandler,
    // Query handlers
    GetPizzaHandler, GetRestaurantHandler, ListPizzasHandler, ListRestaurantsHandler,
    // Ports
    PairingRepositoryPort, PizzaRepositoryPort, RestaurantRepositoryPort,
};

/// 应用状态
///
/// 只持有 Handler，所有数据都在数据库中
pub struct AppState {
    // ========== Command Handlers ==========
    pub delete_restaurant_handler: DeleteRestaurantHandler,
    pub create_pairing_handler: CreatePairingHandler,

    // ========== Query Handlers ==========
    pub list_restaurants_handler: ListRestaurantsHandler,
    pub get_restaurant_handler: GetRestaurantHandler,
    pub list_pizzas_handler: ListPizzasHandler,
    pub get_pizza_handler: GetPizzaHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        restaurant_repo: Arc<dyn RestaurantRepositoryPort>,
        pizza_repo: Arc<dyn PizzaRepositoryPort>,
        pairing_repo: Arc<dyn PairingRepositoryPort>,
    ) -> Self {
        Self {
            // Command handlers
            delete_restaurant_handler: DeleteRestaurantHandler::new(restaurant_repo.clone()),
            create_pairing_handler: CreatePairingHandler::new(
                restaurant_repo.clone(),
                pizza_repo.clone(),
                pairing_repo.clone(),
            ),

            // Query handlers
            list_restaurants_handler: ListRestaurantsHandler::new(restaurant_repo.clone()),
            get_restaurant_handler: GetRestaurantHandler::new(restaurant_repo, pairing_repo.clone()),
            list_pizzas_handler: ListPizzasHandler::new(pizza_repo.clone()),
            get_pizza_handler: GetPizzaHandler::new(pizza_repo, pairing_repo),
        }
    }
}
