//! Application assembly and serving.
//!
//! [`create_router`] wires API routes into a full application router with
//! documentation UIs, CORS, tracing, security headers, and compression.
//! [`create_app`] and [`create_production_app`] bind the listener and serve
//! until a shutdown signal arrives.

use axum::{Router, http::HeaderValue, middleware};
use core_config::server::ServerConfig;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use super::shutdown::{ShutdownCoordinator, shutdown_signal};
use crate::errors::handlers::not_found;
use crate::http::security_headers;

/// Build the CORS layer from the `CORS_ALLOWED_ORIGIN` environment variable.
///
/// Without the variable set, cross-origin requests are not allowed.
fn cors_layer() -> CorsLayer {
    match std::env::var("CORS_ALLOWED_ORIGIN") {
        Ok(origin) => match origin.parse::<HeaderValue>() {
            Ok(value) => CorsLayer::new()
                .allow_origin(value)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
            Err(_) => {
                warn!("Invalid CORS_ALLOWED_ORIGIN value, CORS disabled: {origin}");
                CorsLayer::new()
            }
        },
        Err(_) => CorsLayer::new(),
    }
}

/// Assemble the application router.
///
/// API routes are nested under `/api`. The OpenAPI document is served through
/// Swagger UI (`/swagger-ui`), Redoc (`/redoc`), RapiDoc (`/rapidoc`), and
/// Scalar (`/scalar`).
pub async fn create_router<T: OpenApi>(
    api_routes: Router,
) -> Result<Router, Box<dyn std::error::Error>> {
    let openapi = T::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi.clone()))
        .merge(Redoc::with_url("/redoc", openapi.clone()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", openapi))
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(security_headers))
        .layer(cors_layer())
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Bind and serve until SIGINT/SIGTERM.
pub async fn create_app(
    router: Router,
    config: &ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Listening on {address}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Bind and serve with coordinated shutdown and post-drain cleanup.
///
/// After the listener drains, `cleanup` runs under `cleanup_timeout` so a
/// stuck resource cannot block process exit.
pub async fn create_production_app<F>(
    router: Router,
    config: &ServerConfig,
    cleanup_timeout: std::time::Duration,
    cleanup: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Listening on {address}");

    let coordinator = ShutdownCoordinator::new();
    let signal_coordinator = coordinator.clone();
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            signal_coordinator.wait_for_signal().await;
        })
        .await?;

    info!("Server drained, running cleanup");
    if tokio::time::timeout(cleanup_timeout, cleanup).await.is_err() {
        warn!(
            "Cleanup did not finish within {}s, exiting anyway",
            cleanup_timeout.as_secs()
        );
    }

    info!("Server stopped");
    Ok(())
}
