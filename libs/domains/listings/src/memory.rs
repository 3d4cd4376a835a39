//! In-memory implementation of ListingRepository
//!
//! Used in handler tests and local development. Matches the MongoDB
//! implementation's filter and ordering semantics.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ListingError, ListingResult};
use crate::models::{CreateListing, Listing, ListingFilter, UpdateListing};
use crate::repository::ListingRepository;

/// In-memory ListingRepository backed by a HashMap
#[derive(Clone, Default)]
pub struct InMemoryListingRepository {
    listings: Arc<RwLock<HashMap<Uuid, Listing>>>,
}

impl InMemoryListingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn matches(listing: &Listing, filter: &ListingFilter) -> bool {
        if let Some(ref name) = filter.name
            && !listing.title.to_lowercase().contains(&name.to_lowercase())
        {
            return false;
        }

        if let Some(ref author) = filter.author
            && !listing
                .author
                .to_lowercase()
                .contains(&author.to_lowercase())
        {
            return false;
        }

        // Raw exact match against the wire form, mirroring the BSON filter
        if let Some(ref status) = filter.status
            && listing.status.to_string() != *status
        {
            return false;
        }

        true
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepository {
    async fn create(&self, input: CreateListing) -> ListingResult<Listing> {
        let listing = Listing::new(input);
        let mut listings = self.listings.write().await;
        listings.insert(listing.id, listing.clone());
        Ok(listing)
    }

    async fn get_by_id(&self, id: Uuid) -> ListingResult<Option<Listing>> {
        let listings = self.listings.read().await;
        Ok(listings.get(&id).cloned())
    }

    async fn list(&self, filter: ListingFilter) -> ListingResult<Vec<Listing>> {
        let listings = self.listings.read().await;
        let mut matched: Vec<Listing> = listings
            .values()
            .filter(|listing| Self::matches(listing, &filter))
            .cloned()
            .collect();

        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }

    async fn update(&self, id: Uuid, input: UpdateListing) -> ListingResult<Listing> {
        let mut listings = self.listings.write().await;
        let listing = listings.get_mut(&id).ok_or(ListingError::NotFound(id))?;
        listing.apply_update(input);
        Ok(listing.clone())
    }

    async fn delete(&self, id: Uuid) -> ListingResult<bool> {
        let mut listings = self.listings.write().await;
        if listings.remove(&id).is_none() {
            return Err(ListingError::NotFound(id));
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ListingStatus;

    fn create_input(title: &str, author: &str) -> CreateListing {
        CreateListing {
            title: title.to_string(),
            content: "content".to_string(),
            author: author.to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = InMemoryListingRepository::new();
        let created = repo.create(create_input("Chair", "alice")).await.unwrap();

        let found = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found.title, "Chair");
        assert_eq!(found.status, ListingStatus::ForSale);
    }

    #[tokio::test]
    async fn test_list_sorted_newest_first() {
        let repo = InMemoryListingRepository::new();
        repo.create(create_input("first", "alice")).await.unwrap();
        repo.create(create_input("second", "alice")).await.unwrap();
        repo.create(create_input("third", "alice")).await.unwrap();

        let listings = repo.list(ListingFilter::default()).await.unwrap();
        assert_eq!(listings.len(), 3);
        for pair in listings.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
        assert_eq!(listings[0].title, "third");
    }

    #[tokio::test]
    async fn test_name_filter_is_case_insensitive_substring() {
        let repo = InMemoryListingRepository::new();
        repo.create(create_input("FooBar", "alice")).await.unwrap();
        repo.create(create_input("Chair", "alice")).await.unwrap();

        let filter = ListingFilter {
            name: Some("foo".to_string()),
            ..Default::default()
        };
        let listings = repo.list(filter).await.unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "FooBar");
    }

    #[tokio::test]
    async fn test_status_filter_is_exact() {
        let repo = InMemoryListingRepository::new();
        let created = repo.create(create_input("Chair", "alice")).await.unwrap();
        repo.create(create_input("Table", "bob")).await.unwrap();

        repo.update(
            created.id,
            UpdateListing {
                title: "Chair".to_string(),
                content: "content".to_string(),
                password: "secret".to_string(),
                status: Some(ListingStatus::SoldOut),
            },
        )
        .await
        .unwrap();

        let filter = ListingFilter {
            status: Some("SOLD_OUT".to_string()),
            ..Default::default()
        };
        let listings = repo.list(filter).await.unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "Chair");
    }

    #[tokio::test]
    async fn test_unknown_status_matches_nothing() {
        let repo = InMemoryListingRepository::new();
        repo.create(create_input("Chair", "alice")).await.unwrap();

        let filter = ListingFilter {
            status: Some("BOGUS".to_string()),
            ..Default::default()
        };
        let listings = repo.list(filter).await.unwrap();
        assert!(listings.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_returns_not_found() {
        let repo = InMemoryListingRepository::new();
        let err = repo.delete(Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, ListingError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_missing_returns_not_found() {
        let repo = InMemoryListingRepository::new();
        let err = repo
            .update(
                Uuid::now_v7(),
                UpdateListing {
                    title: "t".to_string(),
                    content: "c".to_string(),
                    password: "p".to_string(),
                    status: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ListingError::NotFound(_)));
    }
}
