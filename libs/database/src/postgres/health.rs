use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::DatabaseError;

/// Check PostgreSQL health by running `SELECT 1` on a pooled connection.
///
/// Backs the readiness probe and the startup connectivity check.
///
/// ```ignore
/// use database::postgres::{check_health, connect_from_config_with_retry};
///
/// let db = connect_from_config_with_retry(config, None).await?;
/// check_health(&db).await?;
/// ```
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running PostgreSQL health check");

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_owned());
    db.query_one_raw(stmt).await.map_err(|e| {
        DatabaseError::HealthCheckFailed(format!("PostgreSQL health check failed: {}", e))
    })?;

    debug!("PostgreSQL health check passed");
    Ok(())
}
