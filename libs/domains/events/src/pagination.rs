//! Pagination over a fully materialized enriched result set.

use crate::models::EnrichedEvent;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed page size of the event search endpoint
pub const PAGE_SIZE: usize = 10;

/// One page of enriched events plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventPage {
    /// Events on this page, at most `pageSize` of them
    pub events: Vec<EnrichedEvent>,
    /// The served page, clamped into `[1, totalPages]`
    pub page: usize,
    pub page_size: usize,
    /// Size of the full candidate set
    pub total_events: usize,
    /// Never 0: an empty candidate set still reports one (empty) page
    pub total_pages: usize,
}

/// Slice a full result list into the requested page.
///
/// Pure function. The requested page is clamped into `[1, total_pages]`,
/// where `total_pages` is at least 1 so the clamp interval is always
/// well-formed; an empty list yields page 1 with no events.
pub fn paginate(events: Vec<EnrichedEvent>, requested_page: i64, page_size: usize) -> EventPage {
    debug_assert!(page_size > 0);

    let total_events = events.len();
    let total_pages = total_events.div_ceil(page_size).max(1);
    let page = requested_page.clamp(1, total_pages as i64) as usize;

    let start = (page - 1) * page_size;
    let events: Vec<EnrichedEvent> = events.into_iter().skip(start).take(page_size).collect();

    EventPage {
        events,
        page,
        page_size,
        total_events,
        total_pages,
    }
}
