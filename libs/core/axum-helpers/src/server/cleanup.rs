//! Connection cleanup run after the server stops accepting requests.

use tracing::{error, info};

/// Close a SeaORM PostgreSQL pool, logging the outcome.
///
/// ```ignore
/// use axum_helpers::server::close_postgres;
///
/// close_postgres(db, "users").await;
/// ```
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection '{}' closed successfully", name),
        Err(e) => error!("Error closing PostgreSQL connection '{}': {}", name, e),
    }
}
