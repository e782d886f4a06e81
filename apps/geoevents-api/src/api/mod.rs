//! API routes module
//!
//! This module defines all HTTP API routes for the geoevents service.

pub mod events;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
///
/// Routes keep their public paths (`/events/find`, `/add`) — they are merged
/// at the root by `axum_helpers::create_router`.
pub fn routes(state: &AppState) -> eyre::Result<Router> {
    Ok(Router::new()
        .merge(events::router(state)?)
        .merge(health::router(state.clone())))
}
