use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::{error, info};

use super::config::SqliteConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};

/// Connect with default pool settings.
pub async fn connect(url: &str) -> DatabaseResult<DatabaseConnection> {
    connect_from_config(SqliteConfig::new(url)).await
}

pub async fn connect_with_options(options: ConnectOptions) -> DatabaseResult<DatabaseConnection> {
    Database::connect(options).await.map_err(|e| {
        error!("Failed to connect to SQLite: {}", e);
        DatabaseError::ConnectionFailed(e.to_string())
    })
}

pub async fn connect_from_config(config: SqliteConfig) -> DatabaseResult<DatabaseConnection> {
    info!("Connecting to SQLite database at {}", config.url());
    let db = connect_with_options(config.into_connect_options()).await?;
    info!("Connected to SQLite database");
    Ok(db)
}

/// Connect, retrying with exponential backoff (the database file may be locked at startup).
///
/// # Example
/// ```ignore
/// use database::sqlite::{SqliteConfig, connect_from_config_with_retry};
///
/// let db = connect_from_config_with_retry(SqliteConfig::from_env()?, None).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: SqliteConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<DatabaseConnection> {
    let retry_config = retry_config.unwrap_or_default();
    retry_with_backoff(|| connect_from_config(config.clone()), retry_config).await
}

/// Apply every pending migration of `M`.
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> DatabaseResult<()> {
    info!("Running database migrations for {}...", app_name);
    M::up(db, None).await.map_err(|e| {
        error!("Failed to run migrations for {}: {}", app_name, e);
        DatabaseError::MigrationError(e.to_string())
    })?;
    info!("Migrations completed for {}", app_name);
    Ok(())
}
