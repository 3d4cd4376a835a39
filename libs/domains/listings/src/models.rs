use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Sale status of a listing
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Default,
    ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingStatus {
    /// Listing is available for purchase
    #[default]
    ForSale,
    /// Listing has been sold
    SoldOut,
}

/// Listing entity - a single product record stored in MongoDB
///
/// The password is persisted alongside the record and compared verbatim on
/// mutating requests. It is never serialized into API responses; clients
/// only ever see [`ListingSummary`] or [`ListingDetail`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Listing title
    pub title: String,
    /// Full description text
    pub content: String,
    /// Seller name
    pub author: String,
    /// Plaintext password guarding update and delete
    pub password: String,
    /// Current sale status
    pub status: ListingStatus,
    /// Creation timestamp, the sole sort key (newest first)
    ///
    /// Stored as a native BSON datetime so the collection sort is
    /// chronological, not lexicographic.
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// Reduced listing view returned by the list operation
///
/// Excludes content and password.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummary {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
}

/// Full listing view returned by get-by-id
///
/// Everything except the password.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingDetail {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
}

/// DTO for creating a new listing
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateListing {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    #[validate(length(min = 1, message = "author is required"))]
    pub author: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// DTO for updating an existing listing
///
/// Title, content, and password are required. An omitted status leaves the
/// stored status unchanged.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateListing {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    pub status: Option<ListingStatus>,
}

/// DTO for deleting a listing
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct DeleteListing {
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Query filters for the list operation
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ListingFilter {
    /// Case-insensitive substring match against the title
    pub name: Option<String>,
    /// Case-insensitive substring match against the author
    pub author: Option<String>,
    /// Exact status match; values outside the enum match nothing
    pub status: Option<String>,
}

/// Response body carrying a confirmation message
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the list operation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListingListResponse {
    pub data: Vec<ListingSummary>,
}

/// Response body for get-by-id
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListingDetailResponse {
    pub data: ListingDetail,
}

impl Listing {
    /// Create a new listing from the create DTO
    ///
    /// Generates the id and creation timestamp; status starts as FOR_SALE.
    pub fn new(input: CreateListing) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            content: input.content,
            author: input.author,
            password: input.password,
            status: ListingStatus::default(),
            created_at: Utc::now(),
        }
    }

    /// Apply updates from the update DTO
    ///
    /// Author, password, and createdAt are never touched.
    pub fn apply_update(&mut self, update: UpdateListing) {
        self.title = update.title;
        self.content = update.content;
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

impl From<Listing> for ListingSummary {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            title: listing.title,
            author: listing.author,
            status: listing.status,
            created_at: listing.created_at,
        }
    }
}

impl From<Listing> for ListingDetail {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            title: listing.title,
            content: listing.content,
            author: listing.author,
            status: listing.status,
            created_at: listing.created_at,
        }
    }
}
