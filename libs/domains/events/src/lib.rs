//! Events Domain
//!
//! Event ingestion, storage and enriched querying:
//! - MongoDB for event persistence (bulk-imported from a CSV dataset)
//! - two independent remote lookups (weather, distance) per served event,
//!   with partial-failure tolerance
//! - deterministic ordering and pagination over the full candidate set
//!
//! # Architecture
//!
//! ```text
//! GET /events/find ──► EventService ──► EventRepository (15-day window, sorted)
//!                          │
//!                          ├─► EventEnricher ──► weather lookup ─┐ per event,
//!                          │        └──────────► distance lookup ┘ concurrent
//!                          │
//!                          └─► paginate (fixed page size 10)
//!
//! GET /add ──► EventService ──► CSV dataset ──► EventRepository (bulk insert)
//! ```

use utoipa::OpenApi;

mod enrich;
mod enrichment;
mod error;
mod handlers;
mod import;
mod models;
mod mongodb;
mod pagination;
mod repository;
mod service;

pub use enrich::EventEnricher;
pub use enrichment::{
    EnrichmentClient, EnrichmentConfig, EnrichmentError, EnrichmentResult, HttpEnrichmentClient,
    DEFAULT_DISTANCE_URL, DEFAULT_WEATHER_URL,
};
pub use error::{EventError, EventResult};
pub use handlers::{events_router, import_router, ImportResponse};
pub use import::read_dataset;
pub use models::{
    Coordinates, Distance, EnrichedEvent, FindEventsQuery, StoredEvent, DISTANCE_FALLBACK,
    WEATHER_FALLBACK,
};
pub use mongodb::MongoEventRepository;
pub use pagination::{paginate, EventPage, PAGE_SIZE};
pub use repository::EventRepository;
pub use service::{EventService, DEFAULT_ENRICHMENT_CONCURRENCY, WINDOW_DAYS};

/// OpenAPI documentation for the events API
#[derive(OpenApi)]
#[openapi(
    paths(handlers::find_events, handlers::import_events),
    components(schemas(EnrichedEvent, EventPage, ImportResponse)),
    tags(
        (name = "events", description = "Enriched event search and dataset import")
    )
)]
pub struct ApiDoc;
