use std::time::Duration;

/// User agent string for HTTP requests
pub const USER_AGENT: &str = concat!("mcp-openmeteo/", env!("CARGO_PKG_VERSION"));

/// Open-Meteo forecast API base URL
pub const FORECAST_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Open-Meteo historical archive API base URL
pub const ARCHIVE_API_BASE: &str = "https://archive-api.open-meteo.com/v1";

/// Open-Meteo air quality API base URL
pub const AIR_QUALITY_API_BASE: &str = "https://air-quality-api.open-meteo.com/v1";

/// Open-Meteo geocoding API base URL
pub const GEOCODING_API_BASE: &str = "https://geocoding-api.open-meteo.com/v1";

/// Open-Meteo marine API base URL
pub const MARINE_API_BASE: &str = "https://marine-api.open-meteo.com/v1";

/// Minimum spacing between two outbound requests
pub const RATE_LIMIT_INTERVAL: Duration = Duration::from_millis(200);

pub const DEFAULT_GEOCODE_COUNT: u32 = 3;
pub const MAX_GEOCODE_COUNT: u32 = 10;
