//! End-to-end query orchestration.
//!
//! One `run()` call is one user query: geocode the place, fetch the forecast
//! for the best candidate, normalize, derive alerts, pick a theme. All state
//! lives in the returned [`Dashboard`]; nothing is shared between queries.

use tracing::instrument;

use crate::alerts::{self, Alert};
use crate::client::ForecastClient;
use crate::error::WeatherError;
use crate::geocode::GeocodingClient;
use crate::normalize;
use crate::theme::{self, Theme};
use crate::types::{Location, WeatherSnapshot};

/// Render-ready bundle for one query.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub location: Location,
    /// Remaining geocode candidates, best first, for disambiguation hints.
    pub alternates: Vec<Location>,
    pub snapshot: WeatherSnapshot,
    pub alerts: Vec<Alert>,
    pub theme: Theme,
}

pub struct WeatherPipeline {
    geocoder: GeocodingClient,
    forecast: ForecastClient,
}

impl WeatherPipeline {
    pub fn new() -> Self {
        Self {
            geocoder: GeocodingClient::new(),
            forecast: ForecastClient::new(),
        }
    }

    /// Build a pipeline against specific endpoints (config overrides, tests).
    pub fn with_endpoints(geocoding_url: &str, forecast_url: &str, timeout_secs: u64) -> Self {
        Self {
            geocoder: GeocodingClient::with_endpoint(geocoding_url, timeout_secs),
            forecast: ForecastClient::with_endpoint(forecast_url, timeout_secs),
        }
    }

    /// Run one query end to end.
    ///
    /// Fail-fast: the first stage error aborts the query and is returned
    /// unchanged. Theme selection alone cannot fail.
    #[instrument(skip(self), level = "info")]
    pub async fn run(&self, place: &str) -> Result<Dashboard, WeatherError> {
        let candidates = self.geocoder.search(place).await?;

        let mut ranked = candidates.into_iter();
        let location = ranked
            .next()
            .ok_or_else(|| WeatherError::NotFound(place.trim().to_string()))?;
        let alternates: Vec<Location> = ranked.collect();

        tracing::info!(
            latitude = location.latitude,
            longitude = location.longitude,
            "resolved {:?} to {}",
            place,
            location.display_name()
        );

        let payload = self
            .forecast
            .fetch(location.latitude, location.longitude)
            .await?;
        let snapshot = normalize::snapshot(&payload)?;

        let alerts = alerts::derive(&snapshot);
        let theme = theme::select(snapshot.current.weather_code, snapshot.current.is_day);
        tracing::debug!(
            alerts = alerts.len(),
            theme = theme.id,
            hours = snapshot.hourly.len(),
            "dashboard ready"
        );

        Ok(Dashboard {
            location,
            alternates,
            snapshot,
            alerts,
            theme,
        })
    }
}

impl Default for WeatherPipeline {
    fn default() -> Self {
        Self::new()
    }
}
