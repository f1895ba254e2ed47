use std::sync::Arc;

use anyhow::Result;
use reqwest::Client;
use serde_json::Value;

use crate::constants::USER_AGENT;
use crate::error::UpstreamError;
use crate::rate_limit::RateLimiter;

/// HTTP client for the Open-Meteo API family. Every request goes through the
/// shared [`RateLimiter`], whichever tool issued it.
#[derive(Clone)]
pub struct OpenMeteoClient {
    http: Client,
    limiter: Arc<RateLimiter>,
}

impl OpenMeteoClient {
    pub fn new(limiter: Arc<RateLimiter>) -> Result<Self> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, limiter })
    }

    /// Makes a rate-limited GET request and parses the body as JSON.
    pub async fn fetch(&self, url: &str) -> Result<Value, UpstreamError> {
        self.limiter.acquire().await;

        tracing::debug!(%url, "requesting Open-Meteo");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "Open-Meteo request failed");
            return Err(UpstreamError::Status { status });
        }

        let body = response.text().await?;
        let data = serde_json::from_str(&body)?;
        Ok(data)
    }
}
