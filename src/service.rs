use std::sync::Arc;

use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde::Serialize;

use crate::client::OpenMeteoClient;
use crate::config::Config;
use crate::endpoints;
use crate::error::UpstreamError;
use crate::formatters::{project_geocoding, to_pretty_json};
use crate::models::{GeocodeRequest, GetHistoricalRequest, GetWeatherRequest, LocationRequest};
use crate::rate_limit::RateLimiter;

/// MCP service exposing the Open-Meteo tools
#[derive(Clone)]
pub struct OpenMeteo {
    client: OpenMeteoClient,
    config: Arc<Config>,
    tool_router: ToolRouter<Self>,
}

impl OpenMeteo {
    /// Creates a service with its own rate limiter
    pub fn new(config: Config) -> Result<Self> {
        let limiter = Arc::new(RateLimiter::new(config.rate_limit_interval));
        Self::with_limiter(config, limiter)
    }

    /// Creates a service that paces its requests with an existing limiter
    pub fn with_limiter(config: Config, limiter: Arc<RateLimiter>) -> Result<Self> {
        Ok(Self {
            client: OpenMeteoClient::new(limiter)?,
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        })
    }

    /// Fetches a URL and wraps the raw JSON as the tool's text content.
    /// Upstream failures become an `isError` tool result.
    async fn fetch_raw(&self, url: &str) -> Result<CallToolResult, McpError> {
        match self.client.fetch(url).await {
            Ok(data) => text_result(&data),
            Err(e) => Ok(e.into_tool_result()),
        }
    }
}

fn text_result<T: Serialize + ?Sized>(value: &T) -> Result<CallToolResult, McpError> {
    let text = to_pretty_json(value).map_err(|e| {
        McpError::internal_error(format!("Failed to serialize result: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_handler]
impl ServerHandler for OpenMeteo {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-openmeteo".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Weather data from the free Open-Meteo API (no API key). \
                Current conditions and forecasts, hourly forecasts, historical data, \
                air quality, marine conditions, and place name geocoding. \
                Use geocode first to turn a place name into coordinates."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl OpenMeteo {
    #[tool(description = "Get current weather and 7-day forecast. Free, no API key.")]
    async fn get_weather(
        &self,
        Parameters(request): Parameters<GetWeatherRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting weather for coordinates: {}, {} ({:?})",
            request.latitude,
            request.longitude,
            request.units
        );
        request.validate()?;

        let url = endpoints::weather_url(
            &self.config,
            request.latitude,
            request.longitude,
            request.units,
        );
        self.fetch_raw(&url).await
    }

    #[tool(description = "Get hourly forecast (48h).")]
    async fn get_hourly(
        &self,
        Parameters(request): Parameters<LocationRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting hourly forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );
        request.validate()?;

        let url = endpoints::hourly_url(&self.config, request.latitude, request.longitude);
        self.fetch_raw(&url).await
    }

    #[tool(description = "Get historical weather data.")]
    async fn get_historical(
        &self,
        Parameters(request): Parameters<GetHistoricalRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting historical weather for coordinates: {}, {} from {} to {}",
            request.latitude,
            request.longitude,
            request.start_date,
            request.end_date
        );
        request.validate()?;

        let url = endpoints::historical_url(
            &self.config,
            request.latitude,
            request.longitude,
            &request.start_date,
            &request.end_date,
        );
        self.fetch_raw(&url).await
    }

    #[tool(description = "Get air quality index and pollutant levels.")]
    async fn get_air_quality(
        &self,
        Parameters(request): Parameters<LocationRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting air quality for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );
        request.validate()?;

        let url = endpoints::air_quality_url(&self.config, request.latitude, request.longitude);
        self.fetch_raw(&url).await
    }

    #[tool(description = "Convert location name to coordinates.")]
    async fn geocode(
        &self,
        Parameters(request): Parameters<GeocodeRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Geocoding '{}' (count {})", request.name, request.count);
        request.validate()?;

        let url = endpoints::geocode_url(&self.config, &request.name, request.count);
        let results = self
            .client
            .fetch(&url)
            .await
            .and_then(|data| project_geocoding(data).map_err(UpstreamError::from));
        match results {
            Ok(results) => text_result(&results),
            Err(e) => Ok(e.into_tool_result()),
        }
    }

    #[tool(description = "Get marine/ocean forecast.")]
    async fn get_marine(
        &self,
        Parameters(request): Parameters<LocationRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting marine forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );
        request.validate()?;

        let url = endpoints::marine_url(&self.config, request.latitude, request.longitude);
        self.fetch_raw(&url).await
    }
}
