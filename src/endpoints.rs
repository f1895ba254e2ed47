//! Request URLs for each tool. Timezones are always resolved upstream from
//! the coordinates (`timezone=auto`).

use crate::config::Config;
use crate::models::Units;

pub fn weather_url(config: &Config, latitude: f64, longitude: f64, units: Units) -> String {
    format!(
        "{}/forecast?latitude={}&longitude={}&current=temperature_2m,relative_humidity_2m,wind_speed_10m,weather_code&daily=weather_code,temperature_2m_max,temperature_2m_min,precipitation_sum&temperature_unit={}&wind_speed_unit={}&timezone=auto",
        config.forecast_base,
        latitude,
        longitude,
        units.temperature_unit(),
        units.wind_speed_unit()
    )
}

pub fn hourly_url(config: &Config, latitude: f64, longitude: f64) -> String {
    format!(
        "{}/forecast?latitude={}&longitude={}&hourly=temperature_2m,precipitation_probability,weather_code,wind_speed_10m&forecast_hours=48&timezone=auto",
        config.forecast_base, latitude, longitude
    )
}

pub fn historical_url(
    config: &Config,
    latitude: f64,
    longitude: f64,
    start_date: &str,
    end_date: &str,
) -> String {
    format!(
        "{}/archive?latitude={}&longitude={}&start_date={}&end_date={}&daily=temperature_2m_max,temperature_2m_min,precipitation_sum&timezone=auto",
        config.archive_base, latitude, longitude, start_date, end_date
    )
}

pub fn air_quality_url(config: &Config, latitude: f64, longitude: f64) -> String {
    format!(
        "{}/air-quality?latitude={}&longitude={}&current=us_aqi,pm10,pm2_5,carbon_monoxide,nitrogen_dioxide,ozone",
        config.air_quality_base, latitude, longitude
    )
}

pub fn geocode_url(config: &Config, name: &str, count: u32) -> String {
    format!(
        "{}/search?name={}&count={}",
        config.geocoding_base,
        urlencoding::encode(name),
        count
    )
}

pub fn marine_url(config: &Config, latitude: f64, longitude: f64) -> String {
    format!(
        "{}/marine?latitude={}&longitude={}&current=wave_height,wave_direction,wave_period&daily=wave_height_max,wave_period_max&timezone=auto",
        config.marine_base, latitude, longitude
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_metric_units() {
        let url = weather_url(&Config::default(), 52.52, 13.41, Units::Metric);
        assert!(url.starts_with("https://api.open-meteo.com/v1/forecast?latitude=52.52&longitude=13.41"));
        assert!(url.contains("temperature_unit=celsius&wind_speed_unit=kmh"));
        assert!(url.ends_with("&timezone=auto"));
    }

    #[test]
    fn weather_imperial_units() {
        let url = weather_url(&Config::default(), 40.7128, -74.006, Units::Imperial);
        assert!(url.contains("longitude=-74.006"));
        assert!(url.contains("temperature_unit=fahrenheit&wind_speed_unit=mph"));
    }

    #[test]
    fn hourly_requests_48_hours() {
        let url = hourly_url(&Config::default(), 1.0, 2.0);
        assert!(url.contains("forecast_hours=48"));
    }

    #[test]
    fn historical_uses_archive_host() {
        let url = historical_url(&Config::default(), 48.85, 2.35, "2024-01-01", "2024-01-31");
        assert!(url.starts_with("https://archive-api.open-meteo.com/v1/archive?"));
        assert!(url.contains("start_date=2024-01-01&end_date=2024-01-31"));
    }

    #[test]
    fn air_quality_and_marine_hosts() {
        let config = Config::default();
        assert!(air_quality_url(&config, 1.0, 2.0)
            .starts_with("https://air-quality-api.open-meteo.com/v1/air-quality?"));
        assert!(marine_url(&config, 1.0, 2.0)
            .starts_with("https://marine-api.open-meteo.com/v1/marine?"));
    }

    #[test]
    fn geocode_encodes_name() {
        let url = geocode_url(&Config::default(), "São Paulo & co", 3);
        assert_eq!(
            url,
            "https://geocoding-api.open-meteo.com/v1/search?name=S%C3%A3o%20Paulo%20%26%20co&count=3"
        );
    }
}
