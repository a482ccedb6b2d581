use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

use super::PostgresConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};

async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!("Successfully connected to PostgreSQL database");
    Ok(db)
}

/// Connect from config, retrying with exponential backoff.
///
/// Used at startup so the service tolerates the database coming up a little
/// after it. `None` uses the default [`RetryConfig`].
///
/// ```ignore
/// use core_config::FromEnv;
/// use database::postgres::{PostgresConfig, connect_from_config_with_retry};
///
/// let config = PostgresConfig::from_env()?;
/// let db = connect_from_config_with_retry(config, None).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry_config: Option<RetryConfig>,
) -> DatabaseResult<DatabaseConnection> {
    config.validate()?;
    let options = config.into_connect_options();
    let retry_config = retry_config.unwrap_or_default();
    let attempts = retry_config.max_retries + 1;

    retry_with_backoff(
        || {
            let opts = options.clone();
            connect_with_options(opts)
        },
        retry_config,
    )
    .await
    .map_err(|e| {
        DatabaseError::ConnectionFailed(format!(
            "PostgreSQL unreachable after {} attempts: {}",
            attempts, e
        ))
    })
}
