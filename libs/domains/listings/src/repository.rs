use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ListingResult;
use crate::models::{CreateListing, Listing, ListingFilter, UpdateListing};

/// Repository trait for Listing persistence
///
/// Implementations can use different storage backends (MongoDB for
/// production, in-memory for tests).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Create a new listing
    async fn create(&self, input: CreateListing) -> ListingResult<Listing>;

    /// Get a listing by ID
    async fn get_by_id(&self, id: Uuid) -> ListingResult<Option<Listing>>;

    /// List listings matching a filter, newest first
    async fn list(&self, filter: ListingFilter) -> ListingResult<Vec<Listing>>;

    /// Update an existing listing
    async fn update(&self, id: Uuid, input: UpdateListing) -> ListingResult<Listing>;

    /// Delete a listing by ID
    async fn delete(&self, id: Uuid) -> ListingResult<bool>;
}
