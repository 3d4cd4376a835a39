//! Listing Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ListingError, ListingResult};
use crate::models::{CreateListing, Listing, ListingFilter, UpdateListing};
use crate::repository::ListingRepository;

/// Listing service providing business logic operations
///
/// The service layer handles validation and the password gate on mutating
/// operations, and orchestrates repository calls.
pub struct ListingService<R: ListingRepository> {
    repository: Arc<R>,
}

impl<R: ListingRepository> ListingService<R> {
    /// Create a new ListingService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new listing
    #[instrument(skip(self, input), fields(listing_title = %input.title))]
    pub async fn create_listing(&self, input: CreateListing) -> ListingResult<Listing> {
        input
            .validate()
            .map_err(|e| ListingError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a listing by ID
    #[instrument(skip(self))]
    pub async fn get_listing(&self, id: Uuid) -> ListingResult<Listing> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ListingError::NotFound(id))
    }

    /// List listings matching the filter, newest first
    #[instrument(skip(self))]
    pub async fn list_listings(&self, filter: ListingFilter) -> ListingResult<Vec<Listing>> {
        self.repository.list(filter).await
    }

    /// Update a listing after checking the supplied password
    ///
    /// Order of checks matters for the error contract: validation first,
    /// then existence, then the password comparison.
    #[instrument(skip(self, input))]
    pub async fn update_listing(&self, id: Uuid, input: UpdateListing) -> ListingResult<Listing> {
        input
            .validate()
            .map_err(|e| ListingError::Validation(e.to_string()))?;

        let existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ListingError::NotFound(id))?;

        if input.password != existing.password {
            return Err(ListingError::WrongPassword);
        }

        self.repository.update(id, input).await
    }

    /// Delete a listing after checking the supplied password
    #[instrument(skip(self, password))]
    pub async fn delete_listing(&self, id: Uuid, password: &str) -> ListingResult<()> {
        if password.is_empty() {
            return Err(ListingError::Validation("password is required".to_string()));
        }

        let existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ListingError::NotFound(id))?;

        if password != existing.password {
            return Err(ListingError::WrongPassword);
        }

        self.repository.delete(id).await?;
        Ok(())
    }
}

impl<R: ListingRepository> Clone for ListingService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListingStatus;
    use crate::repository::MockListingRepository;

    fn create_input() -> CreateListing {
        CreateListing {
            title: "Chair".to_string(),
            content: "Wooden chair".to_string(),
            author: "alice".to_string(),
            password: "p1".to_string(),
        }
    }

    fn stored_listing() -> Listing {
        Listing::new(create_input())
    }

    fn update_input(password: &str) -> UpdateListing {
        UpdateListing {
            title: "Chair v2".to_string(),
            content: "Still wooden".to_string(),
            password: password.to_string(),
            status: Some(ListingStatus::SoldOut),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_empty_title() {
        let mut repo = MockListingRepository::new();
        repo.expect_create().never();

        let service = ListingService::new(repo);
        let mut input = create_input();
        input.title = String::new();

        let err = service.create_listing(input).await.unwrap_err();
        assert!(matches!(err, ListingError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_delegates_to_repository() {
        let mut repo = MockListingRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|input| Ok(Listing::new(input)));

        let service = ListingService::new(repo);
        let listing = service.create_listing(create_input()).await.unwrap();
        assert_eq!(listing.status, ListingStatus::ForSale);
    }

    #[tokio::test]
    async fn test_get_missing_returns_not_found() {
        let mut repo = MockListingRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ListingService::new(repo);
        let err = service.get_listing(Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, ListingError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_with_wrong_password_leaves_store_untouched() {
        let listing = stored_listing();
        let id = listing.id;

        let mut repo = MockListingRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(listing.clone())));
        repo.expect_update().never();

        let service = ListingService::new(repo);
        let err = service
            .update_listing(id, update_input("wrong"))
            .await
            .unwrap_err();
        assert!(matches!(err, ListingError::WrongPassword));
    }

    #[tokio::test]
    async fn test_update_with_correct_password_succeeds() {
        let listing = stored_listing();
        let id = listing.id;

        let mut repo = MockListingRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(listing.clone())));
        repo.expect_update().times(1).returning(|id, input| {
            let mut updated = stored_listing();
            updated.id = id;
            updated.apply_update(input);
            Ok(updated)
        });

        let service = ListingService::new(repo);
        let updated = service.update_listing(id, update_input("p1")).await.unwrap();
        assert_eq!(updated.title, "Chair v2");
        assert_eq!(updated.status, ListingStatus::SoldOut);
    }

    #[tokio::test]
    async fn test_update_missing_listing_returns_not_found_before_password_check() {
        let mut repo = MockListingRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let service = ListingService::new(repo);
        let err = service
            .update_listing(Uuid::now_v7(), update_input("wrong"))
            .await
            .unwrap_err();
        assert!(matches!(err, ListingError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_with_wrong_password_leaves_store_untouched() {
        let listing = stored_listing();
        let id = listing.id;

        let mut repo = MockListingRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(listing.clone())));
        repo.expect_delete().never();

        let service = ListingService::new(repo);
        let err = service.delete_listing(id, "wrong").await.unwrap_err();
        assert!(matches!(err, ListingError::WrongPassword));
    }

    #[tokio::test]
    async fn test_delete_with_empty_password_rejected_before_lookup() {
        let mut repo = MockListingRepository::new();
        repo.expect_get_by_id().never();
        repo.expect_delete().never();

        let service = ListingService::new(repo);
        let err = service
            .delete_listing(Uuid::now_v7(), "")
            .await
            .unwrap_err();
        assert!(matches!(err, ListingError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_with_correct_password_succeeds() {
        let listing = stored_listing();
        let id = listing.id;

        let mut repo = MockListingRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(listing.clone())));
        repo.expect_delete().times(1).returning(|_| Ok(true));

        let service = ListingService::new(repo);
        service.delete_listing(id, "p1").await.unwrap();
    }
}
