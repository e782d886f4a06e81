//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Geoevents API",
        version = "0.1.0",
        description = "Event search with weather and distance enrichment, backed by MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "", api = domain_events::ApiDoc)
    ),
    tags(
        (name = "events", description = "Enriched event search and dataset import")
    )
)]
pub struct ApiDoc;
