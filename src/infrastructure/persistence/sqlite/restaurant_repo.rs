//! SQLite Restaurant Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::{map_db_error, DbPool};
use crate::application::ports::{RepositoryError, RestaurantRepositoryPort};
use crate::domain::catalog::{NewRestaurant, Restaurant, RestaurantId};

/// SQLite Restaurant Repository
pub struct SqliteRestaurantRepository {
    pool: DbPool,
}

impl SqliteRestaurantRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct RestaurantRow {
    id: i64,
    name: String,
    address: String,
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        Restaurant {
            id: RestaurantId::new(row.id),
            name: row.name,
            address: row.address,
        }
    }
}

#[async_trait]
impl RestaurantRepositoryPort for SqliteRestaurantRepository {
    async fn save(&self, restaurant: &NewRestaurant) -> Result<Restaurant, RepositoryError> {
        let row: RestaurantRow = sqlx::query_as(
            "INSERT INTO restaurants (name, address) VALUES (?, ?) RETURNING id, name, address",
        )
        .bind(&restaurant.name)
        .bind(&restaurant.address)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: RestaurantId) -> Result<Option<Restaurant>, RepositoryError> {
        let row: Option<RestaurantRow> =
            sqlx::query_as("SELECT id, name, address FROM restaurants WHERE id = ?")
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(row.map(Restaurant::from))
    }

    async fn find_all(&self) -> Result<Vec<Restaurant>, RepositoryError> {
        let rows: Vec<RestaurantRow> =
            sqlx::query_as("SELECT id, name, address FROM restaurants ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Restaurant::from).collect())
    }

    async fn delete_cascade(&self, id: RestaurantId) -> Result<bool, RepositoryError> {
        // 使用事务确保原子性：先删 Pairing，再删餐厅
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let pairings = sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = ?")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let restaurants = sqlx::query("DELETE FROM restaurants WHERE id = ?")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if restaurants.rows_affected() == 0 {
            // tx 被 drop 时回滚
            return Ok(false);
        }

        tx.commit().await.map_err(map_db_error)?;

        tracing::debug!(
            restaurant_id = %id,
            pairings_deleted = pairings.rows_affected(),
            "Restaurant cascade delete committed"
        );

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::testing::memory_pool;

    #[tokio::test]
    async fn test_save_assigns_ids_in_order() {
        let repo = SqliteRestaurantRepository::new(memory_pool().await);

        let first = repo.save(&NewRestaurant::new("A", "1")).await.unwrap();
        let second = repo.save(&NewRestaurant::new("B", "2")).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(repo.find_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_delete_cascade_removes_only_own_pairings() {
        let pool = memory_pool().await;
        let repo = SqliteRestaurantRepository::new(pool.clone());
        let keep = repo.save(&NewRestaurant::new("Keep", "1")).await.unwrap();
        let gone = repo.save(&NewRestaurant::new("Drop", "2")).await.unwrap();
        sqlx::query("INSERT INTO pizzas (name, ingredients) VALUES ('p', 'i')")
            .execute(&pool)
            .await
            .unwrap();
        for restaurant_id in [keep.id, gone.id, gone.id] {
            sqlx::query(
                "INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id, created_at) VALUES (3, 1, ?, 'now')",
            )
            .bind(restaurant_id.value())
            .execute(&pool)
            .await
            .unwrap();
        }

        assert!(repo.delete_cascade(gone.id).await.unwrap());

        let remaining: Vec<i64> =
            sqlx::query_scalar("SELECT restaurant_id FROM restaurant_pizzas")
                .fetch_all(&pool)
                .await
                .unwrap();
        assert_eq!(remaining, vec![keep.id.value()]);
        assert!(repo.find_by_id(gone.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let repo = SqliteRestaurantRepository::new(memory_pool().await);
        assert!(!repo.delete_cascade(RestaurantId::new(1)).await.unwrap());
    }
}
