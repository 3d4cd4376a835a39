//! Listings Domain
//!
//! Complete domain implementation for product listings backed by MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, password gate
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB/in-memory implementations)
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_listings::{
//!     handlers,
//!     mongodb::MongoListingRepository,
//!     service::ListingService,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("marketplace");
//!
//! let repository = MongoListingRepository::new(db);
//! let service = ListingService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ListingError, ListingResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryListingRepository;
pub use models::{
    CreateListing, Listing, ListingDetail, ListingFilter, ListingStatus, ListingSummary,
    UpdateListing,
};
pub use mongodb::MongoListingRepository;
pub use repository::ListingRepository;
pub use service::ListingService;
