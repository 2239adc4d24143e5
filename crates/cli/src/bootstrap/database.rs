use livehub_domain::config::DatabaseConfig;
use livehub_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!("Initializing database: {}", cfg.path);

    let pool = create_pool(cfg).await.map_err(|e| {
        error!("Failed to initialize database pool: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        "Database initialized successfully (max_connections={}, busy_timeout={}s)",
        cfg.max_connections, cfg.busy_timeout_secs,
    );

    Ok(pool)
}
