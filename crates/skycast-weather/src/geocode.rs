//! Forward geocoding: resolve a free-form place name to coordinates.
//! Uses the Open-Meteo geocoding API - free, no API key required.

use std::time::Duration;

use tracing::instrument;

use crate::api::GeocodingResponse;
use crate::error::WeatherError;
use crate::http::decode_response;
use crate::types::Location;

const GEOCODING_API_BASE: &str = "https://geocoding-api.open-meteo.com/v1/search";
const DEFAULT_TIMEOUT_SECS: u64 = 20;
const MAX_CANDIDATES: u8 = 5;

pub struct GeocodingClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl GeocodingClient {
    pub fn new() -> Self {
        Self::with_endpoint(GEOCODING_API_BASE, DEFAULT_TIMEOUT_SECS)
    }

    /// Point the client at a different endpoint, e.g. a self-hosted instance.
    pub fn with_endpoint(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Resolve a place name to candidate locations, best match first.
    ///
    /// Returns `InvalidInput` for a blank query before touching the network,
    /// and `NotFound` when the provider has no match.
    #[instrument(skip(self), level = "info")]
    pub async fn search(&self, place: &str) -> Result<Vec<Location>, WeatherError> {
        let query = place.trim();
        if query.is_empty() {
            return Err(WeatherError::InvalidInput(
                "place name must not be empty".to_string(),
            ));
        }

        let url = format!(
            "{}?name={}&count={}&language=en&format=json",
            self.base_url,
            urlencoding::encode(query),
            MAX_CANDIDATES,
        );

        let response = self.client.get(&url).timeout(self.timeout).send().await?;
        let body: GeocodingResponse = decode_response(response).await?;

        let records = body.results.unwrap_or_default();
        if records.is_empty() {
            return Err(WeatherError::NotFound(query.to_string()));
        }

        tracing::debug!(candidates = records.len(), "geocoded {:?}", query);
        Ok(records.into_iter().map(Location::from).collect())
    }
}

impl Default for GeocodingClient {
    fn default() -> Self {
        Self::new()
    }
}
