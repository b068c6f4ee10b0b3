//! PostgreSQL pool construction

use crate::config::AppConfig;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::info;

/// Connect the process-wide pool. Fails if the store is unreachable, so a
/// bad `MIMIR_DATABASE_URL` surfaces at startup rather than on first query.
pub async fn connect(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&config.database_url)
        .await?;

    info!(
        max_connections = config.db_max_connections,
        "database pool ready"
    );
    Ok(pool)
}
