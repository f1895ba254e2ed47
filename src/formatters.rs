use serde::Serialize;
use serde_json::Value;

use crate::models::{GeocodingResponse, GeocodingResult};

/// Renders a tool result as 2-space indented JSON text.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Keeps the caller-facing fields of each geocoding match, in upstream order.
/// A missing or null `results` list yields no matches.
pub fn project_geocoding(data: Value) -> Result<Vec<GeocodingResult>, serde_json::Error> {
    let response: GeocodingResponse = serde_json::from_value(data)?;
    Ok(response.results.unwrap_or_default())
}
