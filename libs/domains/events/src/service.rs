//! Event service layer: candidate selection, enrichment fan-out, pagination.

use crate::enrich::EventEnricher;
use crate::enrichment::EnrichmentClient;
use crate::error::{EventError, EventResult};
use crate::import;
use crate::models::{Coordinates, EnrichedEvent};
use crate::pagination::{paginate, EventPage, PAGE_SIZE};
use crate::repository::EventRepository;
use chrono::{Duration, NaiveDate};
use futures::stream::{self, StreamExt};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Length of the search window in days, end exclusive
pub const WINDOW_DAYS: i64 = 15;

/// Default bound on concurrently running enrichments per request
pub const DEFAULT_ENRICHMENT_CONCURRENCY: usize = 16;

/// Coordinates the repository, the enricher and the paginator.
pub struct EventService<R: EventRepository, C: EnrichmentClient> {
    repository: Arc<R>,
    enricher: EventEnricher<C>,
    concurrency: usize,
    dataset_path: PathBuf,
}

impl<R: EventRepository, C: EnrichmentClient> EventService<R, C> {
    pub fn new(repository: R, client: C) -> Self {
        Self {
            repository: Arc::new(repository),
            enricher: EventEnricher::new(client),
            concurrency: DEFAULT_ENRICHMENT_CONCURRENCY,
            dataset_path: PathBuf::from("./dataset.csv"),
        }
    }

    /// Bound the enrichment fan-out; at least one task runs.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Source file for [`Self::import_dataset`].
    pub fn with_dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset_path = path.into();
        self
    }

    /// Enrich every event in the 15-day window starting at `search_date`.
    ///
    /// Candidates come back from the store already sorted (date, then time);
    /// enrichments run concurrently up to the configured bound, and all of
    /// them are awaited — one slow or failed lookup neither short-circuits
    /// nor reorders the result.
    #[instrument(skip(self))]
    pub async fn get_combined_data(
        &self,
        user: Coordinates,
        search_date: NaiveDate,
    ) -> EventResult<Vec<EnrichedEvent>> {
        let window_end = search_date + Duration::days(WINDOW_DAYS);
        let candidates = self
            .repository
            .find_in_window(search_date, window_end)
            .await?;
        debug!(candidates = candidates.len(), "events in search window");

        let enriched = stream::iter(candidates)
            .map(|event| {
                let enricher = self.enricher.clone();
                async move { enricher.enrich(&event, user).await }
            })
            .buffered(self.concurrency)
            .collect::<Vec<_>>()
            .await;

        Ok(enriched)
    }

    /// Full aggregation followed by pagination at the fixed page size.
    #[instrument(skip(self))]
    pub async fn find_events(
        &self,
        user: Coordinates,
        search_date: NaiveDate,
        requested_page: i64,
    ) -> EventResult<EventPage> {
        let events = self.get_combined_data(user, search_date).await?;
        Ok(paginate(events, requested_page, PAGE_SIZE))
    }

    /// One-shot import of the configured dataset file into the store.
    #[instrument(skip(self))]
    pub async fn import_dataset(&self) -> EventResult<usize> {
        let path = self.dataset_path.clone();
        info!(path = %path.display(), "importing dataset");

        let events = tokio::task::spawn_blocking(move || import::read_dataset(&path))
            .await
            .map_err(|e| EventError::internal(format!("import task failed: {e}")))??;

        let inserted = self
            .repository
            .insert_batch(events)
            .await
            .map_err(|e| EventError::import(e.to_string()))?;

        info!(inserted, "dataset import complete");
        Ok(inserted)
    }
}
