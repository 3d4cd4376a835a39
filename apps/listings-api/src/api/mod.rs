//! API routes module

pub mod health;
pub mod listings;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", listings::router(state))
        .merge(health::router(state.clone()))
}
