//! Event repository trait

use crate::error::EventResult;
use crate::models::StoredEvent;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Repository trait for event storage operations.
///
/// Implementations can use different storage backends (MongoDB, etc.).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Events with `start <= date < end_exclusive`, sorted ascending by
    /// date then by time (lexicographic).
    async fn find_in_window(
        &self,
        start: NaiveDate,
        end_exclusive: NaiveDate,
    ) -> EventResult<Vec<StoredEvent>>;

    /// Bulk-insert imported events; returns the inserted count.
    async fn insert_batch(&self, events: Vec<StoredEvent>) -> EventResult<usize>;
}
