//! Demo Seed - 示例数据

use chrono::Utc;

use super::DbPool;

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant 下标, pizza 下标, price)
const PAIRINGS: &[(usize, usize, i64)] = &[(0, 0, 1), (1, 1, 4), (2, 2, 5)];

/// 表为空时写入示例目录
///
/// 返回是否写入了数据
pub async fn seed_demo_data(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurants")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::info!(restaurants = existing, "Catalog not empty, skipping demo seed");
        return Ok(false);
    }

    let mut tx = pool.begin().await?;

    let mut restaurant_ids = Vec::with_capacity(RESTAURANTS.len());
    for &(name, address) in RESTAURANTS {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO restaurants (name, address) VALUES (?, ?) RETURNING id")
                .bind(name)
                .bind(address)
                .fetch_one(&mut *tx)
                .await?;
        restaurant_ids.push(id);
    }

    let mut pizza_ids = Vec::with_capacity(PIZZAS.len());
    for &(name, ingredients) in PIZZAS {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO pizzas (name, ingredients) VALUES (?, ?) RETURNING id")
                .bind(name)
                .bind(ingredients)
                .fetch_one(&mut *tx)
                .await?;
        pizza_ids.push(id);
    }

    let now = Utc::now().to_rfc3339();
    for &(restaurant, pizza, price) in PAIRINGS {
        sqlx::query(
            "INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(price)
        .bind(pizza_ids[pizza])
        .bind(restaurant_ids[restaurant])
        .bind(&now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        restaurants = RESTAURANTS.len(),
        pizzas = PIZZAS.len(),
        pairings = PAIRINGS.len(),
        "Demo catalog seeded"
    );

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::testing::memory_pool;

    #[tokio::test]
    async fn test_seed_runs_once() {
        let pool = memory_pool().await;

        assert!(seed_demo_data(&pool).await.unwrap());
        assert!(!seed_demo_data(&pool).await.unwrap());

        let pairings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurant_pizzas")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(pairings, PAIRINGS.len() as i64);
    }
}
