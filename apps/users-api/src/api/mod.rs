//! API routes module

pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(users::router(state))
        .merge(health::router(state))
}
