//! SQLite Database - 数据库连接和迁移

use sqlx::error::ErrorKind;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;

use crate::application::ports::RepositoryError;
use crate::config;

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 数据库 URL
    pub database_url: String,
    /// 最大连接数
    pub max_connections: u32,
}

impl From<&config::DatabaseConfig> for DatabaseConfig {
    fn from(config: &config::DatabaseConfig) -> Self {
        Self {
            database_url: config.database_url(),
            max_connections: config.max_connections,
        }
    }
}

impl DatabaseConfig {
    /// 内存数据库只能有一个连接，否则每个连接各自一份数据
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:")
    }
}

/// 数据库连接池
pub type DbPool = Pool<Sqlite>;

/// 创建数据库连接池
///
/// 外键约束在每个连接上开启（SQLite 默认关闭）。
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let mut options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_millis(5000));

    let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);

    if config.is_in_memory() {
        // 连接被回收时内存数据库也随之消失
        pool_options = pool_options
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>);
    } else {
        options = options
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);
    }

    let pool = pool_options.connect_with(options).await?;

    tracing::info!(
        url = %config.database_url,
        max_connections = config.max_connections,
        "SQLite pool created with foreign keys enabled"
    );

    Ok(pool)
}

/// 运行数据库迁移
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS restaurants (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            address TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pizzas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            ingredients TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // pizza_id 没有 ON DELETE 动作：被引用的披萨不能删除
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS restaurant_pizzas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            price INTEGER NOT NULL CHECK (price BETWEEN 1 AND 30),
            pizza_id INTEGER NOT NULL,
            restaurant_id INTEGER NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT,
            CONSTRAINT fk_restaurant_pizzas_pizza_id_pizzas
                FOREIGN KEY (pizza_id) REFERENCES pizzas(id),
            CONSTRAINT fk_restaurant_pizzas_restaurant_id_restaurants
                FOREIGN KEY (restaurant_id) REFERENCES restaurants(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_restaurant_pizzas_restaurant_id
        ON restaurant_pizzas(restaurant_id)
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_restaurant_pizzas_pizza_id
        ON restaurant_pizzas(pizza_id)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}

/// 将 sqlx 错误归类为 RepositoryError
pub(crate) fn map_db_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if matches!(
            db_err.kind(),
            ErrorKind::ForeignKeyViolation
                | ErrorKind::CheckViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::UniqueViolation
        ) {
            return RepositoryError::ConstraintViolation(db_err.message().to_string());
        }
    }
    RepositoryError::DatabaseError(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_db() -> DbPool {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_create_in_memory_db() {
        let pool = memory_db().await;
        // 迁移可重复执行
        run_migrations(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn test_price_check_constraint() {
        let pool = memory_db().await;
        sqlx::query("INSERT INTO restaurants (name, address) VALUES ('r', 'a')")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO pizzas (name, ingredients) VALUES ('p', 'i')")
            .execute(&pool)
            .await
            .unwrap();

        let err = sqlx::query(
            "INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id, created_at) VALUES (31, 1, 1, 'now')",
        )
        .execute(&pool)
        .await
        .unwrap_err();

        assert!(matches!(
            map_db_error(err),
            RepositoryError::ConstraintViolation(_)
        ));
    }

    #[tokio::test]
    async fn test_foreign_keys_enforced() {
        let pool = memory_db().await;

        let err = sqlx::query(
            "INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id, created_at) VALUES (5, 1, 1, 'now')",
        )
        .execute(&pool)
        .await
        .unwrap_err();

        assert!(matches!(
            map_db_error(err),
            RepositoryError::ConstraintViolation(_)
        ));
    }

    #[test]
    fn test_in_memory_detection() {
        assert!(DatabaseConfig::in_memory().is_in_memory());

        let file_config = DatabaseConfig::from(&config::DatabaseConfig::default());
        assert!(!file_config.is_in_memory());
        assert_eq!(file_config.database_url, "sqlite:data/app.db?mode=rwc");
        assert_eq!(file_config.max_connections, 5);
    }

    #[test]
    fn test_url_override_carries_over() {
        let app_config = config::DatabaseConfig {
            url: Some("sqlite::memory:".to_string()),
            max_connections: 1,
            ..config::DatabaseConfig::default()
        };

        let db_config = DatabaseConfig::from(&app_config);

        assert!(db_config.is_in_memory());
        assert_eq!(db_config.max_connections, 1);
    }
}
