//! Events API routes
//!
//! Wires the events domain to MongoDB and the HTTP enrichment client.

use crate::state::AppState;
use axum::Router;
use domain_events::{EventService, HttpEnrichmentClient, MongoEventRepository};
use std::sync::Arc;
use tracing::info;

/// Create the events router with the search and import endpoints
pub fn router(state: &AppState) -> eyre::Result<Router> {
    // MongoDB repository over the shared database handle
    let repository = MongoEventRepository::new(&state.db);

    // Outbound client for the two enrichment services
    let client = HttpEnrichmentClient::new(state.config.enrichment.clone())
        .map_err(|e| eyre::eyre!("Failed to build enrichment client: {}", e))?;

    let service = EventService::new(repository, client)
        .with_concurrency(state.config.enrichment_concurrency)
        .with_dataset_path(&state.config.dataset_path);

    let service_state = Arc::new(service);

    // Use the domain's routers: search nested under /events, import at /add
    Ok(Router::new()
        .nest("/events", domain_events::events_router().with_state(service_state.clone()))
        .merge(domain_events::import_router().with_state(service_state)))
}

/// Initialize event indexes in MongoDB
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    let repository = MongoEventRepository::new(db);
    repository
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create event indexes: {}", e))?;
    info!("Event collection indexes created");
    Ok(())
}
