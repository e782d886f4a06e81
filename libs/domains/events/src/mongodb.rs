//! MongoDB implementation of EventRepository

use crate::error::EventResult;
use crate::models::StoredEvent;
use crate::repository::EventRepository;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson};
use mongodb::options::FindOptions;
use mongodb::{Collection, Database, IndexModel};
use tracing::instrument;

/// MongoDB-based event repository
#[derive(Clone)]
pub struct MongoEventRepository {
    collection: Collection<StoredEvent>,
}

impl MongoEventRepository {
    /// Create a new MongoDB event repository
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection("events"),
        }
    }

    /// Midnight UTC of a calendar date as a BSON datetime
    fn bson_midnight(date: NaiveDate) -> Bson {
        let midnight = date.and_time(NaiveTime::MIN).and_utc();
        Bson::DateTime(mongodb::bson::DateTime::from_millis(
            midnight.timestamp_millis(),
        ))
    }

    /// Create indexes for efficient querying
    pub async fn create_indexes(&self) -> EventResult<()> {
        // Compound index backing the window query and its sort order
        let index = IndexModel::builder()
            .keys(doc! { "date": 1, "time": 1 })
            .build();

        self.collection.create_index(index).await?;
        Ok(())
    }
}

#[async_trait]
impl EventRepository for MongoEventRepository {
    #[instrument(skip(self))]
    async fn find_in_window(
        &self,
        start: NaiveDate,
        end_exclusive: NaiveDate,
    ) -> EventResult<Vec<StoredEvent>> {
        let filter = doc! {
            "date": {
                "$gte": Self::bson_midnight(start),
                "$lt": Self::bson_midnight(end_exclusive),
            }
        };
        let options = FindOptions::builder()
            .sort(doc! { "date": 1, "time": 1 })
            .build();

        let cursor = self.collection.find(filter).with_options(options).await?;
        let events: Vec<StoredEvent> = cursor.try_collect().await?;
        Ok(events)
    }

    #[instrument(skip(self, events), fields(count = events.len()))]
    async fn insert_batch(&self, events: Vec<StoredEvent>) -> EventResult<usize> {
        if events.is_empty() {
            return Ok(0);
        }

        let result = self.collection.insert_many(&events).await?;
        Ok(result.inserted_ids.len())
    }
}
