//! Server setup, health endpoints, and graceful shutdown.

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_production_app, create_router};
pub use health::{HealthResponse, health_handler, health_router};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
