//! Users API - CRUD over the users table

use axum_helpers::server::{close_postgres, create_production_app, create_router};
use core_config::tracing::{init_tracing, init_tracing_with_file, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    match &config.log_file {
        Some(path) => init_tracing_with_file(&config.environment, path)?,
        None => init_tracing(&config.environment),
    }

    info!(
        max_connections = config.database.max_connections,
        "Connecting to PostgreSQL"
    );
    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await?;
    database::postgres::check_health(&db).await?;

    let state = AppState {
        config: config.clone(),
        db: db.clone(),
    };

    let router = create_router::<openapi::ApiDoc>(api::routes(&state));

    info!(
        "Starting {} v{} on {}",
        config.app.name,
        config.app.version,
        config.server.address()
    );

    create_production_app(router, &config.server, Duration::from_secs(30), async move {
        info!("Shutting down: closing PostgreSQL pool");
        close_postgres(db, "users").await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Users API shutdown complete");
    Ok(())
}
