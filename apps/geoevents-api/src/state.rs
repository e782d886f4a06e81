//! Application state management.
//!
//! Shared state passed to request handlers: configuration plus the MongoDB
//! client. The event service itself is wired per-router in `api::events`.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloned for each handler (inexpensive Arc clones).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
}
