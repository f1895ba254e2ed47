use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::{DEFAULT_GEOCODE_COUNT, MAX_GEOCODE_COUNT};
use crate::error::ValidationError;

// ============================================================================
// Open-Meteo API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    pub results: Option<Vec<GeocodingResult>>,
}

/// One geocoding match, reduced to the fields exposed to callers.
/// Values pass through untouched; a key missing upstream is left out of the
/// output while an explicit `null` is kept.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct GeocodingResult {
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub country: Option<Value>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub admin1: Option<Value>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<Value>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<Value>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub timezone: Option<Value>,
    #[serde(default, deserialize_with = "keep_null", skip_serializing_if = "Option::is_none")]
    pub population: Option<Value>,
}

fn keep_null<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius and km/h
    #[default]
    Metric,
    /// Fahrenheit and mph
    Imperial,
}

impl Units {
    pub fn temperature_unit(self) -> &'static str {
        match self {
            Units::Metric => "celsius",
            Units::Imperial => "fahrenheit",
        }
    }

    pub fn wind_speed_unit(self) -> &'static str {
        match self {
            Units::Metric => "kmh",
            Units::Imperial => "mph",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetWeatherRequest {
    #[schemars(description = "Latitude in decimal degrees (-90 to 90)")]
    pub latitude: f64,
    #[schemars(description = "Longitude in decimal degrees (-180 to 180)")]
    pub longitude: f64,
    #[serde(default)]
    #[schemars(description = "Unit system: 'metric' (°C, km/h) or 'imperial' (°F, mph). Defaults to metric.")]
    pub units: Units,
}

/// Parameters shared by the tools that only take a location.
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct LocationRequest {
    #[schemars(description = "Latitude in decimal degrees (-90 to 90)")]
    pub latitude: f64,
    #[schemars(description = "Longitude in decimal degrees (-180 to 180)")]
    pub longitude: f64,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetHistoricalRequest {
    #[schemars(description = "Latitude in decimal degrees (-90 to 90)")]
    pub latitude: f64,
    #[schemars(description = "Longitude in decimal degrees (-180 to 180)")]
    pub longitude: f64,
    #[schemars(description = "YYYY-MM-DD")]
    pub start_date: String,
    #[schemars(description = "YYYY-MM-DD")]
    pub end_date: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GeocodeRequest {
    #[schemars(description = "City/place name")]
    pub name: String,
    #[serde(default = "default_geocode_count")]
    #[schemars(
        description = "Maximum number of matches to request (1-10, default 3)",
        range(min = 1, max = 10)
    )]
    pub count: u32,
}

fn default_geocode_count() -> u32 {
    DEFAULT_GEOCODE_COUNT
}

// ============================================================================
// Validation
// ============================================================================

fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ValidationError::new(
            "latitude",
            format!("{} is outside -90..=90", latitude),
        ));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ValidationError::new(
            "longitude",
            format!("{} is outside -180..=180", longitude),
        ));
    }
    Ok(())
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    // chrono accepts unpadded fields, so pin the length as well.
    if value.len() != 10 {
        return Err(ValidationError::new(
            field,
            format!("'{}' is not a YYYY-MM-DD date", value),
        ));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        ValidationError::new(field, format!("'{}' is not a YYYY-MM-DD date", value))
    })
}

impl GetWeatherRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_coordinates(self.latitude, self.longitude)
    }
}

impl LocationRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_coordinates(self.latitude, self.longitude)
    }
}

impl GetHistoricalRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_coordinates(self.latitude, self.longitude)?;
        let start = parse_date("startDate", &self.start_date)?;
        let end = parse_date("endDate", &self.end_date)?;
        if start > end {
            return Err(ValidationError::new(
                "endDate",
                format!("{} is before startDate {}", self.end_date, self.start_date),
            ));
        }
        Ok(())
    }
}

impl GeocodeRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::new("name", "must not be empty"));
        }
        if !(1..=MAX_GEOCODE_COUNT).contains(&self.count) {
            return Err(ValidationError::new(
                "count",
                format!("{} is outside 1..={}", self.count, MAX_GEOCODE_COUNT),
            ));
        }
        Ok(())
    }
}
