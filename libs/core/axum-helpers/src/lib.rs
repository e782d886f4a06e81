//! # Axum Helpers
//!
//! Utilities and middleware shared by the workspace's Axum services.
//!
//! ## Modules
//!
//! - **[`server`]**: server setup with OpenAPI docs, health endpoint, graceful shutdown
//! - **[`errors`]**: structured error responses
//! - **[`middleware`]**: HTTP middleware (security headers)

pub mod errors;
pub mod middleware;
pub mod server;
pub mod shutdown;

// Re-export server types
pub use server::{
    create_app, create_production_app, create_router, health_router, HealthResponse,
};

// Re-export shutdown types
pub use shutdown::{shutdown_signal, ShutdownCoordinator};

// Re-export error types
pub use errors::ErrorResponse;

// Re-export middleware
pub use middleware::security_headers;
