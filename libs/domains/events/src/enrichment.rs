//! Remote enrichment lookups: weather by city and date, distance between
//! two coordinate pairs.
//!
//! Each lookup is a single outbound HTTP call. A transport error, a
//! non-success status or an undecodable payload yields an
//! [`EnrichmentError`]; the enricher converts that into the documented
//! fallback value. Nothing here is retried or cached.

use crate::models::Coordinates;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::instrument;

/// Default weather service endpoint
pub const DEFAULT_WEATHER_URL: &str =
    "https://gg-backend-assignment.azurewebsites.net/api/Weather";

/// Default distance service endpoint
pub const DEFAULT_DISTANCE_URL: &str =
    "https://gg-backend-assignment.azurewebsites.net/api/Distance";

/// Default per-lookup timeout; expiry is treated like any other failed lookup
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for enrichment lookups
#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("lookup failed with status {0}")]
    Api(reqwest::StatusCode),
}

pub type EnrichmentResult<T> = Result<T, EnrichmentError>;

/// Weather service payload: `{ "weather": "<description>" }`
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherReport {
    pub weather: String,
}

/// Distance service payload: `{ "distance": <number> }`
///
/// The number is kept as `serde_json::Number` so its representation is
/// preserved in the response body.
#[derive(Debug, Clone, Deserialize)]
pub struct DistanceReport {
    pub distance: serde_json::Number,
}

/// Configuration for the enrichment services
#[derive(Clone, Debug)]
pub struct EnrichmentConfig {
    /// Weather service URL
    pub weather_url: String,
    /// Distance service URL
    pub distance_url: String,
    /// Pre-shared credential for the weather service
    pub weather_code: String,
    /// Pre-shared credential for the distance service
    pub distance_code: String,
    /// Per-lookup timeout
    pub timeout: Duration,
}

impl EnrichmentConfig {
    /// Config pointing at the default endpoints with the given credentials
    pub fn new(weather_code: impl Into<String>, distance_code: impl Into<String>) -> Self {
        Self {
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            distance_url: DEFAULT_DISTANCE_URL.to_string(),
            weather_code: weather_code.into(),
            distance_code: distance_code.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Trait for the two per-event enrichment lookups.
///
/// Both operations issue at most one outbound call with the given
/// parameters; failure handling is the caller's concern.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrichmentClient: Send + Sync {
    /// Weather description for a city on a calendar date
    async fn fetch_weather(&self, city: &str, date: NaiveDate)
        -> EnrichmentResult<WeatherReport>;

    /// Distance in kilometres between two coordinate pairs
    async fn fetch_distance(
        &self,
        from: Coordinates,
        to: Coordinates,
    ) -> EnrichmentResult<DistanceReport>;
}

/// HTTP implementation of [`EnrichmentClient`] backed by a shared
/// `reqwest::Client` with a per-request timeout.
pub struct HttpEnrichmentClient {
    client: reqwest::Client,
    config: EnrichmentConfig,
}

#[derive(Serialize)]
struct WeatherParams<'a> {
    code: &'a str,
    city: &'a str,
    date: String,
}

#[derive(Serialize)]
struct DistanceParams<'a> {
    code: &'a str,
    latitude1: f64,
    longitude1: f64,
    latitude2: f64,
    longitude2: f64,
}

impl HttpEnrichmentClient {
    pub fn new(config: EnrichmentConfig) -> EnrichmentResult<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, config })
    }

    async fn get_json<T, P>(&self, url: &str, params: &P) -> EnrichmentResult<T>
    where
        T: for<'de> Deserialize<'de>,
        P: Serialize,
    {
        let response = self.client.get(url).query(params).send().await?;

        if !response.status().is_success() {
            return Err(EnrichmentError::Api(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl EnrichmentClient for HttpEnrichmentClient {
    #[instrument(skip(self), fields(%city, %date))]
    async fn fetch_weather(
        &self,
        city: &str,
        date: NaiveDate,
    ) -> EnrichmentResult<WeatherReport> {
        let params = WeatherParams {
            code: &self.config.weather_code,
            city,
            date: date.format("%Y-%m-%d").to_string(),
        };

        self.get_json(&self.config.weather_url, &params).await
    }

    #[instrument(skip(self))]
    async fn fetch_distance(
        &self,
        from: Coordinates,
        to: Coordinates,
    ) -> EnrichmentResult<DistanceReport> {
        let params = DistanceParams {
            code: &self.config.distance_code,
            latitude1: from.latitude,
            longitude1: from.longitude,
            latitude2: to.latitude,
            longitude2: to.longitude,
        };

        self.get_json(&self.config.distance_url, &params).await
    }
}
