//! Pizzeria - 餐厅/披萨目录 API

use std::sync::Arc;

use pizzeria::config::{load_config, print_config, LogConfig};
use pizzeria::infrastructure::http::{AppState, HttpServer, ServerConfig};
use pizzeria::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, seed_demo_data, DatabaseConfig, SqlitePairingRepository,
    SqlitePizzaRepository, SqliteRestaurantRepository,
};
use tracing_subscriber::EnvFilter;

/// 初始化日志（RUST_LOG 优先于配置）
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},pizzeria={},tower_http=debug", log.level, log.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Pizzeria - Pizza Restaurants API");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = config
        .database
        .file_path()
        .and_then(|path| std::path::Path::new(path).parent())
    {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    // 初始化数据库
    let pool = create_pool(&DatabaseConfig::from(&config.database)).await?;
    run_migrations(&pool).await?;

    if config.database.seed_demo_data {
        seed_demo_data(&pool).await?;
    }

    // 创建 Repository 适配器
    let restaurant_repo = Arc::new(SqliteRestaurantRepository::new(pool.clone()));
    let pizza_repo = Arc::new(SqlitePizzaRepository::new(pool.clone()));
    let pairing_repo = Arc::new(SqlitePairingRepository::new(pool.clone()));

    // 创建 HTTP 服务器
    let server_config = ServerConfig::from(&config.server);
    let state = AppState::new(restaurant_repo, pizza_repo, pairing_repo);

    let server = HttpServer::new(server_config, state);

    server.run_with_shutdown(shutdown_signal()).await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
