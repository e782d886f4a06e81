//! Event domain models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Fallback text substituted when the weather lookup is unavailable.
pub const WEATHER_FALLBACK: &str = "No weather data available";

/// Fallback text substituted when the distance lookup is unavailable.
pub const DISTANCE_FALLBACK: &str = "No data available";

/// A latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Event entity as persisted in the `events` collection.
///
/// Identity is the store-assigned `_id`; nothing downstream reads it, so the
/// model does not map it. Records are written once by the bulk import and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEvent {
    pub event_name: String,
    pub city_name: String,
    /// Calendar date of the event, stored as a BSON datetime at midnight UTC
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
    /// Free-form "HH:MM"-like time of day; sorted lexicographically
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl StoredEvent {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// The event's calendar date, discarding any time-of-day component.
    pub fn lookup_date(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

/// Distance to an event: kilometres as reported by the distance service, or
/// the fallback text when the lookup was unavailable.
///
/// Kept as `serde_json::Number` so the service's numeric representation
/// (integer vs float) survives the round trip to the response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Distance {
    Km(serde_json::Number),
    Unavailable(String),
}

impl Distance {
    pub fn unavailable() -> Self {
        Self::Unavailable(DISTANCE_FALLBACK.to_string())
    }
}

/// An event augmented with weather and distance data, produced per request
/// and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnrichedEvent {
    pub event_name: String,
    pub city_name: String,
    /// ISO calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Weather description, or the fallback text when unavailable
    pub weather: String,
    /// Kilometres (number) or the fallback text (string)
    #[schema(value_type = Object)]
    pub distance_km: Distance,
}

/// Query parameters for the event search endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct FindEventsQuery {
    /// Latitude of the requesting user
    pub user_latitude: f64,
    /// Longitude of the requesting user
    pub user_longitude: f64,
    /// First day of the 15-day search window, `YYYY-MM-DD`
    pub search_date: NaiveDate,
    /// Requested page, 1-based (clamped into range; defaults to 1)
    pub page: Option<i64>,
}

impl FindEventsQuery {
    pub fn user_coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.user_latitude,
            longitude: self.user_longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn event(date: NaiveDate, time: &str) -> StoredEvent {
        StoredEvent {
            event_name: "Fair".to_string(),
            city_name: "Springfield".to_string(),
            date: date.and_time(NaiveTime::MIN).and_utc(),
            time: time.to_string(),
            latitude: 10.0,
            longitude: 20.0,
        }
    }

    #[test]
    fn test_lookup_date_truncates_time_component() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let stored = StoredEvent {
            date: date.and_hms_opt(13, 45, 0).unwrap().and_utc(),
            ..event(date, "10:00")
        };

        assert_eq!(stored.lookup_date(), date);
    }

    #[test]
    fn test_distance_serializes_as_number_or_text() {
        let known = Distance::Km(serde_json::Number::from(42));
        assert_eq!(serde_json::to_value(&known).unwrap(), serde_json::json!(42));

        let missing = Distance::unavailable();
        assert_eq!(
            serde_json::to_value(&missing).unwrap(),
            serde_json::json!("No data available")
        );
    }

    #[test]
    fn test_distance_deserializes_untagged() {
        let known: Distance = serde_json::from_str("17.5").unwrap();
        assert!(matches!(known, Distance::Km(_)));

        let missing: Distance = serde_json::from_str("\"No data available\"").unwrap();
        assert_eq!(missing, Distance::unavailable());
    }

    #[test]
    fn test_find_events_query_camel_case() {
        let query: FindEventsQuery = serde_json::from_value(serde_json::json!({
            "userLatitude": 10.0,
            "userLongitude": 20.0,
            "searchDate": "2024-05-01",
            "page": 2
        }))
        .unwrap();

        assert_eq!(query.user_coordinates().latitude, 10.0);
        assert_eq!(
            query.search_date,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        assert_eq!(query.page, Some(2));
    }
}
