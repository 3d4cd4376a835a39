//! Listings API routes
//!
//! Wires the listings domain to HTTP routes.

use axum::Router;
use domain_listings::{ListingService, MongoListingRepository, handlers};

use crate::state::AppState;

/// Create the listings router backed by MongoDB
pub fn router(state: &AppState) -> Router {
    let repository = MongoListingRepository::new(state.db.clone());
    let service = ListingService::new(repository);

    handlers::router(service)
}
