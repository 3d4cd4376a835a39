//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Listings API",
        version = "0.1.0",
        description = "REST API for a classified-ad style marketplace",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_listings::ApiDoc)
    ),
    tags(
        (name = "Listings", description = "Product listing endpoints")
    )
)]
pub struct ApiDoc;
