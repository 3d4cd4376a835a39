//! MongoDB implementation of ListingRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database,
    bson::{Bson, doc, to_bson},
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ListingError, ListingResult};
use crate::models::{CreateListing, Listing, ListingFilter, UpdateListing};
use crate::repository::ListingRepository;

/// MongoDB implementation of the ListingRepository
pub struct MongoListingRepository {
    collection: Collection<Listing>,
}

impl MongoListingRepository {
    /// Create a new MongoListingRepository
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("marketplace");
    /// let repo = MongoListingRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Listing>("listings");
        Self { collection }
    }

    /// Create a new MongoListingRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<Listing>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Listing> {
        &self.collection
    }

    /// Build a MongoDB filter document from ListingFilter
    fn build_filter(filter: &ListingFilter) -> mongodb::bson::Document {
        let mut doc = doc! {};

        if let Some(ref name) = filter.name {
            doc.insert("title", doc! { "$regex": name, "$options": "i" });
        }

        if let Some(ref author) = filter.author {
            doc.insert("author", doc! { "$regex": author, "$options": "i" });
        }

        // Raw exact match: a value outside the enum simply matches nothing
        if let Some(ref status) = filter.status {
            doc.insert("status", status.as_str());
        }

        doc
    }
}

#[async_trait]
impl ListingRepository for MongoListingRepository {
    #[instrument(skip(self, input), fields(listing_title = %input.title))]
    async fn create(&self, input: CreateListing) -> ListingResult<Listing> {
        let listing = Listing::new(input);

        self.collection.insert_one(&listing).await?;

        tracing::info!(listing_id = %listing.id, "Listing created successfully");
        Ok(listing)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ListingResult<Option<Listing>> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let listing = self.collection.find_one(filter).await?;
        Ok(listing)
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: ListingFilter) -> ListingResult<Vec<Listing>> {
        use futures_util::TryStreamExt;

        let mongo_filter = Self::build_filter(&filter);

        let options = mongodb::options::FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .build();

        let cursor = self
            .collection
            .find(mongo_filter)
            .with_options(options)
            .await?;
        let listings: Vec<Listing> = cursor.try_collect().await?;

        Ok(listings)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateListing) -> ListingResult<Listing> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or(ListingError::NotFound(id))?;

        let mut updated = existing;
        updated.apply_update(input);

        self.collection.replace_one(filter, &updated).await?;

        tracing::info!(listing_id = %id, "Listing updated successfully");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ListingResult<bool> {
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let result = self.collection.delete_one(filter).await?;

        if result.deleted_count == 0 {
            return Err(ListingError::NotFound(id));
        }

        tracing::info!(listing_id = %id, "Listing deleted successfully");
        Ok(true)
    }
}
