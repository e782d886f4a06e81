use core_config::{app_info, env_or_default, env_required, AppInfo, ConfigError, FromEnv};
use domain_events::{EnrichmentConfig, DEFAULT_DISTANCE_URL, DEFAULT_WEATHER_URL};
use std::path::PathBuf;
use std::time::Duration;

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub enrichment: EnrichmentConfig,
    /// Source file consumed by the `/add` endpoint
    pub dataset_path: PathBuf,
    /// Bound on concurrent enrichments per request
    pub enrichment_concurrency: usize,
    pub environment: Environment,
}

pub use core_config::server::ServerConfig;

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let enrichment = enrichment_from_env()?;

        let dataset_path = PathBuf::from(env_or_default("DATASET_PATH", "./dataset.csv"));
        let enrichment_concurrency = parse_env(
            "ENRICHMENT_CONCURRENCY",
            domain_events::DEFAULT_ENRICHMENT_CONCURRENCY,
        )?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            enrichment,
            dataset_path,
            enrichment_concurrency,
            environment,
        })
    }
}

/// The two service credentials are required; URLs and timeout have defaults.
fn enrichment_from_env() -> Result<EnrichmentConfig, ConfigError> {
    let timeout_secs: u64 = parse_env("ENRICHMENT_TIMEOUT_SECS", 10)?;

    Ok(EnrichmentConfig {
        weather_url: env_or_default("WEATHER_API_URL", DEFAULT_WEATHER_URL),
        distance_url: env_or_default("DISTANCE_API_URL", DEFAULT_DISTANCE_URL),
        weather_code: env_required("WEATHER_API_CODE")?,
        distance_code: env_required("DISTANCE_API_CODE")?,
        timeout: Duration::from_secs(timeout_secs),
    })
}

fn parse_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + ToString,
    T::Err: std::fmt::Display,
{
    env_or_default(key, &default.to_string())
        .parse()
        .map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        })
}
