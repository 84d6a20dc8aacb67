//! Pizza Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{PairingRepositoryPort, PizzaRepositoryPort};
use crate::application::queries::{GetPizza, ListPizzas};
use crate::application::views::{PizzaDetail, PizzaSummary};

/// GetPizza Handler
pub struct GetPizzaHandler {
    pizza_repo: Arc<dyn PizzaRepositoryPort>,
    pairing_repo: Arc<dyn PairingRepositoryPort>,
}

impl GetPizzaHandler {
    pub fn new(
        pizza_repo: Arc<dyn PizzaRepositoryPort>,
        pairing_repo: Arc<dyn PairingRepositoryPort>,
    ) -> Self {
        Self {
            pizza_repo,
            pairing_repo,
        }
    }

    pub async fn handle(&self, query: GetPizza) -> Result<PizzaDetail, ApplicationError> {
        let pizza = self
            .pizza_repo
            .find_by_id(query.pizza_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Pizza"))?;

        let pairings = self.pairing_repo.find_by_pizza(pizza.id).await?;

        Ok(PizzaDetail::new(&pizza, &pairings))
    }
}

/// ListPizzas Handler
pub struct ListPizzasHandler {
    pizza_repo: Arc<dyn PizzaRepositoryPort>,
}

impl ListPizzasHandler {
    pub fn new(pizza_repo: Arc<dyn PizzaRepositoryPort>) -> Self {
        Self { pizza_repo }
    }

    pub async fn handle(&self, _query: ListPizzas) -> Result<Vec<PizzaSummary>, ApplicationError> {
        let pizzas = self.pizza_repo.find_all().await?;
        Ok(pizzas.iter().map(PizzaSummary::from).collect())
    }
}
