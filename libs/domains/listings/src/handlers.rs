use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ValidatedBody,
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
        UnauthorizedResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::{ListingError, ListingResult};
use crate::models::{
    CreateListing, DeleteListing, ListingDetail, ListingDetailResponse, ListingFilter,
    ListingListResponse, ListingSummary, MessageResponse, UpdateListing,
};
use crate::repository::ListingRepository;
use crate::service::ListingService;

/// OpenAPI documentation for the Listings API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_listings,
        create_listing,
        get_listing,
        update_listing,
        delete_listing,
    ),
    components(
        schemas(
            CreateListing,
            UpdateListing,
            DeleteListing,
            ListingFilter,
            ListingSummary,
            ListingDetail,
            ListingListResponse,
            ListingDetailResponse,
            MessageResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Listings", description = "Product listing endpoints")
    )
)]
pub struct ApiDoc;

/// Create the listings router with all HTTP endpoints
pub fn router<R: ListingRepository + 'static>(service: ListingService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_listings).post(create_listing))
        .route(
            "/{id}",
            get(get_listing).put(update_listing).delete(delete_listing),
        )
        .with_state(shared_service)
}

/// Parse the id path segment.
///
/// An unparseable id surfaces as an internal error rather than a client
/// error, matching the store-lookup failure contract.
fn parse_id(raw: &str) -> ListingResult<Uuid> {
    raw.parse::<Uuid>()
        .map_err(|_| ListingError::Internal(format!("malformed listing id: {raw}")))
}

/// List listings with optional filters
#[utoipa::path(
    get,
    path = "",
    tag = "Listings",
    params(ListingFilter),
    responses(
        (status = 200, description = "Listing summaries, newest first", body = ListingListResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_listings<R: ListingRepository>(
    State(service): State<Arc<ListingService<R>>>,
    Query(filter): Query<ListingFilter>,
) -> ListingResult<Json<ListingListResponse>> {
    let listings = service.list_listings(filter).await?;
    let data = listings.into_iter().map(ListingSummary::from).collect();
    Ok(Json(ListingListResponse { data }))
}

/// Create a new listing
#[utoipa::path(
    post,
    path = "",
    tag = "Listings",
    request_body = CreateListing,
    responses(
        (status = 201, description = "Listing created", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_listing<R: ListingRepository>(
    State(service): State<Arc<ListingService<R>>>,
    ValidatedBody(input): ValidatedBody<CreateListing>,
) -> ListingResult<impl IntoResponse> {
    service.create_listing(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Listing created successfully")),
    ))
}

/// Get a listing by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Listings",
    params(
        ("id" = Uuid, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing found", body = ListingDetailResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_listing<R: ListingRepository>(
    State(service): State<Arc<ListingService<R>>>,
    Path(id): Path<String>,
) -> ListingResult<Json<ListingDetailResponse>> {
    let id = parse_id(&id)?;
    let listing = service.get_listing(id).await?;
    Ok(Json(ListingDetailResponse {
        data: ListingDetail::from(listing),
    }))
}

/// Update a listing
///
/// Requires the listing's password; an omitted status leaves the stored
/// status unchanged.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Listings",
    params(
        ("id" = Uuid, Path, description = "Listing ID")
    ),
    request_body = UpdateListing,
    responses(
        (status = 200, description = "Listing updated", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_listing<R: ListingRepository>(
    State(service): State<Arc<ListingService<R>>>,
    Path(id): Path<String>,
    ValidatedBody(input): ValidatedBody<UpdateListing>,
) -> ListingResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    service.update_listing(id, input).await?;
    Ok(Json(MessageResponse::new("Listing updated successfully")))
}

/// Delete a listing
///
/// Requires the listing's password in the request body.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Listings",
    params(
        ("id" = Uuid, Path, description = "Listing ID")
    ),
    request_body = DeleteListing,
    responses(
        (status = 200, description = "Listing deleted", body = MessageResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_listing<R: ListingRepository>(
    State(service): State<Arc<ListingService<R>>>,
    Path(id): Path<String>,
    ValidatedBody(input): ValidatedBody<DeleteListing>,
) -> ListingResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    service.delete_listing(id, &input.password).await?;
    Ok(Json(MessageResponse::new("Listing deleted successfully")))
}
