//! Weather data pipeline for Skycast.
//!
//! Turns a free-form place name into a render-ready dashboard bundle via the
//! Open-Meteo API: geocoding, a single forecast fetch, normalization into a
//! validated snapshot, alert derivation, and theme selection.

pub mod alerts;
pub mod api;
pub mod client;
pub mod error;
pub mod geocode;
mod http;
pub mod normalize;
pub mod pipeline;
pub mod theme;
pub mod types;

pub use alerts::{Alert, AlertCategory, Severity};
pub use client::ForecastClient;
pub use error::{FetchError, WeatherError};
pub use geocode::GeocodingClient;
pub use pipeline::{Dashboard, WeatherPipeline};
pub use theme::{Condition, Theme};
pub use types::{CurrentConditions, DailySummary, HourlyEntry, Location, WeatherSnapshot};
