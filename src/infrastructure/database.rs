use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

use crate::infrastructure::config::AppConfig;

/// Connects and brings the schema up to date. The posts table is the
/// only thing in it.
pub async fn connect(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect(&config.database_url)
        .await?;
    info!("connected to PostgreSQL");

    sqlx::migrate!().run(&pool).await?;
    info!("database migrations applied");

    Ok(pool)
}
