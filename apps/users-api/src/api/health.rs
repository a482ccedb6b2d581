//! Liveness and readiness endpoints

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use axum_helpers::server::{health_router, run_health_checks, HealthCheckFuture};
use database::postgres::{check_health, DatabaseConnection};

use crate::state::AppState;

/// `GET /ready`: 200 when PostgreSQL answers `SELECT 1`, 503 otherwise
async fn ready(State(db): State<DatabaseConnection>) -> impl IntoResponse {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async { check_health(&db).await.map_err(|e| e.to_string()) }),
    )];

    run_health_checks(checks).await
}

pub fn router(state: &AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state.db.clone())
        .merge(health_router(state.config.app.clone()))
}
