use std::time::Duration;

use crate::constants::{
    AIR_QUALITY_API_BASE, ARCHIVE_API_BASE, FORECAST_API_BASE, GEOCODING_API_BASE,
    MARINE_API_BASE, RATE_LIMIT_INTERVAL,
};

/// Base URLs of the Open-Meteo API family and the request pacing interval.
#[derive(Clone, Debug)]
pub struct Config {
    pub forecast_base: String,
    pub archive_base: String,
    pub air_quality_base: String,
    pub geocoding_base: String,
    pub marine_base: String,
    pub rate_limit_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            forecast_base: FORECAST_API_BASE.to_string(),
            archive_base: ARCHIVE_API_BASE.to_string(),
            air_quality_base: AIR_QUALITY_API_BASE.to_string(),
            geocoding_base: GEOCODING_API_BASE.to_string(),
            marine_base: MARINE_API_BASE.to_string(),
            rate_limit_interval: RATE_LIMIT_INTERVAL,
        }
    }
}

impl Config {
    /// Builds the configuration from `OPEN_METEO_*` environment variables,
    /// falling back to the public endpoints.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let base = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };

        // Unparseable intervals keep the default.
        let rate_limit_interval = lookup("OPEN_METEO_RATE_LIMIT_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.rate_limit_interval);

        Self {
            forecast_base: base("OPEN_METEO_FORECAST_URL", defaults.forecast_base),
            archive_base: base("OPEN_METEO_ARCHIVE_URL", defaults.archive_base),
            air_quality_base: base("OPEN_METEO_AIR_QUALITY_URL", defaults.air_quality_base),
            geocoding_base: base("OPEN_METEO_GEOCODING_URL", defaults.geocoding_base),
            marine_base: base("OPEN_METEO_MARINE_URL", defaults.marine_base),
            rate_limit_interval,
        }
    }

    /// Points every endpoint at a single base URL. Used to run against a mock server.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        Self {
            forecast_base: base.clone(),
            archive_base: base.clone(),
            air_quality_base: base.clone(),
            geocoding_base: base.clone(),
            marine_base: base,
            rate_limit_interval: RATE_LIMIT_INTERVAL,
        }
    }
}
