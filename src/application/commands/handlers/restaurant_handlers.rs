//! Restaurant Command Handlers

use std::sync::Arc;

use crate::application::commands::DeleteRestaurant;
use crate::application::error::ApplicationError;
use crate::application::ports::RestaurantRepositoryPort;

/// DeleteRestaurant Handler
pub struct DeleteRestaurantHandler {
    restaurant_repo: Arc<dyn RestaurantRepositoryPort>,
}

impl DeleteRestaurantHandler {
    pub fn new(restaurant_repo: Arc<dyn RestaurantRepositoryPort>) -> Self {
        Self { restaurant_repo }
    }

    pub async fn handle(&self, command: DeleteRestaurant) -> Result<(), ApplicationError> {
        let restaurant_id = command.restaurant_id;

        let existed = self.restaurant_repo.delete_cascade(restaurant_id).await?;
        if !existed {
            return Err(ApplicationError::not_found("Restaurant"));
        }

        tracing::info!(restaurant_id = %restaurant_id, "Restaurant deleted");

        Ok(())
    }
}
