//! SQLite Pizza Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::{map_db_error, DbPool};
use crate::application::ports::{PizzaRepositoryPort, RepositoryError};
use crate::domain::catalog::{NewPizza, Pizza, PizzaId};

/// SQLite Pizza Repository
pub struct SqlitePizzaRepository {
    pool: DbPool,
}

impl SqlitePizzaRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PizzaRow {
    id: i64,
    name: String,
    ingredients: String,
}

impl From<PizzaRow> for Pizza {
    fn from(row: PizzaRow) -> Self {
        Pizza {
            id: PizzaId::new(row.id),
            name: row.name,
            ingredients: row.ingredients,
        }
    }
}

#[async_trait]
impl PizzaRepositoryPort for SqlitePizzaRepository {
    async fn save(&self, pizza: &NewPizza) -> Result<Pizza, RepositoryError> {
        let row: PizzaRow = sqlx::query_as(
            "INSERT INTO pizzas (name, ingredients) VALUES (?, ?) RETURNING id, name, ingredients",
        )
        .bind(&pizza.name)
        .bind(&pizza.ingredients)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: PizzaId) -> Result<Option<Pizza>, RepositoryError> {
        let row: Option<PizzaRow> =
            sqlx::query_as("SELECT id, name, ingredients FROM pizzas WHERE id = ?")
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(row.map(Pizza::from))
    }

    async fn find_all(&self) -> Result<Vec<Pizza>, RepositoryError> {
        let rows: Vec<PizzaRow> =
            sqlx::query_as("SELECT id, name, ingredients FROM pizzas ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Pizza::from).collect())
    }
}
