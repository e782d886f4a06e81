//! Event enricher: attaches weather and distance data to a stored event.

use crate::enrichment::EnrichmentClient;
use crate::models::{Coordinates, Distance, EnrichedEvent, StoredEvent, WEATHER_FALLBACK};
use std::sync::Arc;
use tracing::warn;

/// Combines one stored event with the results of the two enrichment lookups.
///
/// Enrichment never fails: each lookup failure is logged and replaced by its
/// documented fallback value, independently of the other lookup.
pub struct EventEnricher<C: EnrichmentClient> {
    client: Arc<C>,
}

impl<C: EnrichmentClient> EventEnricher<C> {
    pub fn new(client: C) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Enrich one event for a user at the given coordinates.
    ///
    /// The two lookups run concurrently; both are awaited before returning.
    pub async fn enrich(&self, event: &StoredEvent, user: Coordinates) -> EnrichedEvent {
        let lookup_date = event.lookup_date();

        let (weather, distance) = tokio::join!(
            self.client.fetch_weather(&event.city_name, lookup_date),
            self.client.fetch_distance(user, event.coordinates()),
        );

        let weather = match weather {
            Ok(report) => Some(report.weather),
            Err(e) => {
                warn!(
                    city = %event.city_name,
                    date = %lookup_date,
                    error = %e,
                    "weather lookup failed, using fallback"
                );
                None
            }
        };

        let distance = match distance {
            Ok(report) => Some(report.distance),
            Err(e) => {
                warn!(
                    event_name = %event.event_name,
                    error = %e,
                    "distance lookup failed, using fallback"
                );
                None
            }
        };

        EnrichedEvent {
            event_name: event.event_name.clone(),
            city_name: event.city_name.clone(),
            date: lookup_date.format("%Y-%m-%d").to_string(),
            weather: weather.unwrap_or_else(|| WEATHER_FALLBACK.to_string()),
            distance_km: distance.map(Distance::Km).unwrap_or_else(Distance::unavailable),
        }
    }
}

impl<C: EnrichmentClient> Clone for EventEnricher<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::{
        DistanceReport, EnrichmentError, MockEnrichmentClient, WeatherReport,
    };
    use crate::models::DISTANCE_FALLBACK;
    use chrono::{NaiveDate, NaiveTime};

    fn sample_event() -> StoredEvent {
        StoredEvent {
            event_name: "Fair".to_string(),
            city_name: "Springfield".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_time(NaiveTime::MIN)
                .and_utc(),
            time: "10:00".to_string(),
            latitude: 10.0,
            longitude: 20.0,
        }
    }

    fn user() -> Coordinates {
        Coordinates {
            latitude: 10.0,
            longitude: 20.0,
        }
    }

    fn status_error() -> EnrichmentError {
        EnrichmentError::Api(reqwest::StatusCode::BAD_GATEWAY)
    }

    #[tokio::test]
    async fn test_enrich_with_both_lookups_succeeding() {
        let mut client = MockEnrichmentClient::new();
        client.expect_fetch_weather().returning(|_, _| {
            Ok(WeatherReport {
                weather: "Sunny".to_string(),
            })
        });
        client.expect_fetch_distance().returning(|_, _| {
            Ok(DistanceReport {
                distance: serde_json::Number::from(0),
            })
        });

        let enriched = EventEnricher::new(client).enrich(&sample_event(), user()).await;

        assert_eq!(enriched.event_name, "Fair");
        assert_eq!(enriched.city_name, "Springfield");
        assert_eq!(enriched.date, "2024-05-01");
        assert_eq!(enriched.weather, "Sunny");
        assert_eq!(enriched.distance_km, Distance::Km(serde_json::Number::from(0)));
    }

    #[tokio::test]
    async fn test_weather_failure_falls_back_but_keeps_distance() {
        let mut client = MockEnrichmentClient::new();
        client
            .expect_fetch_weather()
            .returning(|_, _| Err(status_error()));
        client.expect_fetch_distance().returning(|_, _| {
            Ok(DistanceReport {
                distance: serde_json::Number::from(7),
            })
        });

        let enriched = EventEnricher::new(client).enrich(&sample_event(), user()).await;

        assert_eq!(enriched.weather, WEATHER_FALLBACK);
        assert_eq!(enriched.distance_km, Distance::Km(serde_json::Number::from(7)));
    }

    #[tokio::test]
    async fn test_distance_failure_falls_back_but_keeps_weather() {
        let mut client = MockEnrichmentClient::new();
        client.expect_fetch_weather().returning(|_, _| {
            Ok(WeatherReport {
                weather: "Rainy".to_string(),
            })
        });
        client
            .expect_fetch_distance()
            .returning(|_, _| Err(status_error()));

        let enriched = EventEnricher::new(client).enrich(&sample_event(), user()).await;

        assert_eq!(enriched.weather, "Rainy");
        assert_eq!(
            enriched.distance_km,
            Distance::Unavailable(DISTANCE_FALLBACK.to_string())
        );
    }

    #[tokio::test]
    async fn test_both_failures_produce_both_fallbacks() {
        let mut client = MockEnrichmentClient::new();
        client
            .expect_fetch_weather()
            .returning(|_, _| Err(status_error()));
        client
            .expect_fetch_distance()
            .returning(|_, _| Err(status_error()));

        let enriched = EventEnricher::new(client).enrich(&sample_event(), user()).await;

        assert_eq!(enriched.weather, WEATHER_FALLBACK);
        assert_eq!(enriched.distance_km, Distance::unavailable());
    }

    #[tokio::test]
    async fn test_lookup_uses_truncated_date() {
        let mut event = sample_event();
        event.date = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap()
            .and_utc();

        let mut client = MockEnrichmentClient::new();
        client
            .expect_fetch_weather()
            .withf(|city, date| {
                city == "Springfield" && *date == NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
            })
            .returning(|_, _| {
                Ok(WeatherReport {
                    weather: "Sunny".to_string(),
                })
            });
        client.expect_fetch_distance().returning(|_, _| {
            Ok(DistanceReport {
                distance: serde_json::Number::from(0),
            })
        });

        let enriched = EventEnricher::new(client).enrich(&event, user()).await;
        assert_eq!(enriched.date, "2024-05-01");
    }
}
