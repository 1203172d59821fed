//! Database connection management

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use super::DataSourceConfig;

/// Open a connection pool for the configured SQLite database.
///
/// File databases are created when missing. An in-memory database lives only
/// as long as its connection, so the pool keeps a single connection forever.
pub async fn connect(config: &DataSourceConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections.max(1));
    if config.is_in_memory() {
        pool_options = pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    let pool = pool_options.connect_with(options).await?;
    log::info!("Connected to database {}", config.url);
    Ok(pool)
}
