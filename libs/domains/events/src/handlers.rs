//! HTTP handlers for the events API

use crate::enrichment::EnrichmentClient;
use crate::error::EventError;
use crate::models::FindEventsQuery;
use crate::pagination::EventPage;
use crate::repository::EventRepository;
use crate::service::EventService;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tracing::instrument;

/// Shared handler state
pub type EventsState<R, C> = Arc<EventService<R, C>>;

/// Router for the event search endpoint, nested under `/events` by the app
pub fn events_router<R, C>() -> Router<EventsState<R, C>>
where
    R: EventRepository + 'static,
    C: EnrichmentClient + 'static,
{
    Router::new().route("/find", get(find_events::<R, C>))
}

/// Router for the bulk import endpoint, merged at the root by the app
pub fn import_router<R, C>() -> Router<EventsState<R, C>>
where
    R: EventRepository + 'static,
    C: EnrichmentClient + 'static,
{
    Router::new().route("/add", get(import_events::<R, C>))
}

/// Find enriched events in the 15-day window from a search date
#[utoipa::path(
    get,
    path = "/events/find",
    params(FindEventsQuery),
    responses(
        (status = 200, description = "One page of enriched events", body = EventPage),
        (status = 500, description = "Event store unavailable")
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn find_events<R: EventRepository, C: EnrichmentClient>(
    State(state): State<EventsState<R, C>>,
    Query(query): Query<FindEventsQuery>,
) -> Result<Json<EventPage>, EventError> {
    let page = state
        .find_events(
            query.user_coordinates(),
            query.search_date,
            query.page.unwrap_or(1),
        )
        .await?;

    Ok(Json(page))
}

/// Import the configured dataset file into the event store
#[utoipa::path(
    get,
    path = "/add",
    responses(
        (status = 200, description = "Import completed", body = ImportResponse),
        (status = 500, description = "Import failed")
    ),
    tag = "events"
)]
#[instrument(skip(state))]
pub async fn import_events<R: EventRepository, C: EnrichmentClient>(
    State(state): State<EventsState<R, C>>,
) -> Result<Json<ImportResponse>, EventError> {
    let inserted = state.import_dataset().await?;
    Ok(Json(ImportResponse { inserted }))
}

/// Import result
#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ImportResponse {
    pub inserted: usize,
}
