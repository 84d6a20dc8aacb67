//! SQLite Pairing Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::{map_db_error, DbPool};
use crate::application::ports::{PairingRepositoryPort, RepositoryError};
use crate::domain::catalog::{
    NewPairing, Pairing, PairingId, Pizza, PizzaId, Price, Restaurant, RestaurantId,
};

const PAIRING_COLUMNS: &str =
    "rp.id, rp.price, rp.pizza_id, rp.restaurant_id, rp.created_at, rp.updated_at";

/// SQLite Pairing Repository
pub struct SqlitePairingRepository {
    pool: DbPool,
}

impl SqlitePairingRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// 按 id 读取单个 Pairing
    pub async fn find_by_id(&self, id: PairingId) -> Result<Option<Pairing>, RepositoryError> {
        let query = format!("SELECT {PAIRING_COLUMNS} FROM restaurant_pizzas rp WHERE rp.id = ?");
        let row: Option<PairingRow> = sqlx::query_as(&query)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        row.map(Pairing::try_from).transpose()
    }

    /// Pairing 总数
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_pizzas")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[derive(FromRow)]
struct PairingRow {
    id: i64,
    price: i64,
    pizza_id: i64,
    restaurant_id: i64,
    created_at: String,
    updated_at: Option<String>,
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::SerializationError(e.to_string()))
}

impl TryFrom<PairingRow> for Pairing {
    type Error = RepositoryError;

    fn try_from(row: PairingRow) -> Result<Self, Self::Error> {
        Ok(Pairing::restore(
            PairingId::new(row.id),
            Price::new(row.price)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?,
            PizzaId::new(row.pizza_id),
            RestaurantId::new(row.restaurant_id),
            parse_timestamp(&row.created_at)?,
            row.updated_at.as_deref().map(parse_timestamp).transpose()?,
        ))
    }
}

#[derive(FromRow)]
struct PairingWithPizzaRow {
    #[sqlx(flatten)]
    pairing: PairingRow,
    pizza_name: String,
    pizza_ingredients: String,
}

impl TryFrom<PairingWithPizzaRow> for (Pairing, Pizza) {
    type Error = RepositoryError;

    fn try_from(row: PairingWithPizzaRow) -> Result<Self, Self::Error> {
        let pairing = Pairing::try_from(row.pairing)?;
        let pizza = Pizza {
            id: pairing.pizza_id(),
            name: row.pizza_name,
            ingredients: row.pizza_ingredients,
        };
        Ok((pairing, pizza))
    }
}

#[derive(FromRow)]
struct PairingWithRestaurantRow {
    #[sqlx(flatten)]
    pairing: PairingRow,
    restaurant_name: String,
    restaurant_address: String,
}

impl TryFrom<PairingWithRestaurantRow> for (Pairing, Restaurant) {
    type Error = RepositoryError;

    fn try_from(row: PairingWithRestaurantRow) -> Result<Self, Self::Error> {
        let pairing = Pairing::try_from(row.pairing)?;
        let restaurant = Restaurant {
            id: pairing.restaurant_id(),
            name: row.restaurant_name,
            address: row.restaurant_address,
        };
        Ok((pairing, restaurant))
    }
}

#[async_trait]
impl PairingRepositoryPort for SqlitePairingRepository {
    async fn create(&self, pairing: &NewPairing) -> Result<Pairing, RepositoryError> {
        // 任何一步失败，tx 被 drop，插入随之回滚
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let row: PairingRow = sqlx::query_as(
            r#"
            INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, price, pizza_id, restaurant_id, created_at, updated_at
            "#,
        )
        .bind(pairing.price.value())
        .bind(pairing.pizza_id.value())
        .bind(pairing.restaurant_id.value())
        .bind(Utc::now().to_rfc3339())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let created = Pairing::try_from(row)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(created)
    }

    async fn find_by_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<(Pairing, Pizza)>, RepositoryError> {
        let query = format!(
            r#"
            SELECT {PAIRING_COLUMNS},
                   p.name AS pizza_name, p.ingredients AS pizza_ingredients
            FROM restaurant_pizzas rp
            JOIN pizzas p ON p.id = rp.pizza_id
            WHERE rp.restaurant_id = ?
            ORDER BY rp.id
            "#
        );
        let rows: Vec<PairingWithPizzaRow> = sqlx::query_as(&query)
            .bind(restaurant_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(<(Pairing, Pizza)>::try_from).collect()
    }

    async fn find_by_pizza(
        &self,
        pizza_id: PizzaId,
    ) -> Result<Vec<(Pairing, Restaurant)>, RepositoryError> {
        let query = format!(
            r#"
            SELECT {PAIRING_COLUMNS},
                   r.name AS restaurant_name, r.address AS restaurant_address
            FROM restaurant_pizzas rp
            JOIN restaurants r ON r.id = rp.restaurant_id
            WHERE rp.pizza_id = ?
            ORDER BY rp.id
            "#
        );
        let rows: Vec<PairingWithRestaurantRow> = sqlx::query_as(&query)
            .bind(pizza_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(<(Pairing, Restaurant)>::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::testing::memory_pool;

    async fn seeded_pool() -> DbPool {
        let pool = memory_pool().await;
        sqlx::query("INSERT INTO restaurants (name, address) VALUES ('Karen''s Pizza Shack', 'address1')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO pizzas (name, ingredients) VALUES ('Emma', 'Dough')")
            .execute(&pool)
            .await
            .unwrap();
        pool
    }

    fn new_pairing(price: i64, pizza_id: i64, restaurant_id: i64) -> NewPairing {
        NewPairing {
            price: Price::new(price).unwrap(),
            pizza_id: PizzaId::new(pizza_id),
            restaurant_id: RestaurantId::new(restaurant_id),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_created_at_only() {
        let repo = SqlitePairingRepository::new(seeded_pool().await);

        let pairing = repo.create(&new_pairing(10, 1, 1)).await.unwrap();

        assert_eq!(pairing.price().value(), 10);
        assert!(pairing.updated_at().is_none());
        assert_eq!(repo.find_by_id(pairing.id()).await.unwrap(), Some(pairing));
    }

    #[tokio::test]
    async fn test_dangling_reference_rolls_back() {
        let repo = SqlitePairingRepository::new(seeded_pool().await);

        let err = repo.create(&new_pairing(10, 9999, 1)).await.unwrap_err();

        assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_navigation_both_directions() {
        let repo = SqlitePairingRepository::new(seeded_pool().await);
        let pairing = repo.create(&new_pairing(8, 1, 1)).await.unwrap();

        let by_restaurant = repo.find_by_restaurant(RestaurantId::new(1)).await.unwrap();
        assert_eq!(by_restaurant.len(), 1);
        assert_eq!(by_restaurant[0].0, pairing);
        assert_eq!(by_restaurant[0].1.name, "Emma");

        let by_pizza = repo.find_by_pizza(PizzaId::new(1)).await.unwrap();
        assert_eq!(by_pizza.len(), 1);
        assert_eq!(by_pizza[0].1.name, "Karen's Pizza Shack");

        assert!(repo.find_by_pizza(PizzaId::new(2)).await.unwrap().is_empty());
    }
}
