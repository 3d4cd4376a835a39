//! Application state management.
//!
//! The shared state passed to request handlers: configuration plus the
//! MongoDB client and database handle, constructed once in `main` and
//! dependency-injected from there.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloned per handler (inexpensive, the client shares its connection pool).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
}
