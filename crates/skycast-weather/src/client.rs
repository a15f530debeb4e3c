//! Forecast fetching from the Open-Meteo API.

use std::time::Duration;

use tracing::instrument;

use crate::api::ForecastPayload;
use crate::error::WeatherError;
use crate::http::decode_response;

const FORECAST_API_BASE: &str = "https://api.open-meteo.com/v1/forecast";
const DEFAULT_TIMEOUT_SECS: u64 = 20;

const CURRENT_FIELDS: &str =
    "temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m,weather_code,is_day";
const HOURLY_FIELDS: &str = "temperature_2m,precipitation_probability,wind_speed_10m,weather_code";
const DAILY_FIELDS: &str = "sunrise,sunset,temperature_2m_max,temperature_2m_min,uv_index_max";

// Hourly arrays start at local midnight, so three days always cover the next
// 48 hours regardless of the current time of day.
const FORECAST_DAYS: u8 = 3;

pub struct ForecastClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ForecastClient {
    pub fn new() -> Self {
        Self::with_endpoint(FORECAST_API_BASE, DEFAULT_TIMEOUT_SECS)
    }

    /// Point the client at a different endpoint, e.g. a self-hosted instance.
    pub fn with_endpoint(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Fetch the raw forecast for a coordinate pair.
    ///
    /// One attempt, no retries: any failure surfaces immediately as a
    /// `Fetch` variant. Timestamps in the payload are local to the
    /// coordinates (`timezone=auto`).
    #[instrument(skip(self), level = "info")]
    pub async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<ForecastPayload, WeatherError> {
        let url = format!(
            "{}?latitude={}&longitude={}&current={}&hourly={}&daily={}&timezone=auto&forecast_days={}",
            self.base_url,
            latitude,
            longitude,
            CURRENT_FIELDS,
            HOURLY_FIELDS,
            DAILY_FIELDS,
            FORECAST_DAYS,
        );

        let response = self.client.get(&url).timeout(self.timeout).send().await?;
        decode_response(response).await
    }
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}
