//! Users API routes

use axum::Router;
use domain_users::{handlers, PgUserRepository, UserService};

use crate::state::AppState;

/// Create users router backed by the shared PostgreSQL pool
pub fn router(state: &AppState) -> Router {
    let repository = PgUserRepository::new(state.db.clone());
    let service = UserService::new(repository);
    handlers::router(service, state.config.service_name.clone())
}
