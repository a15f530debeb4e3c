//! Domain types for the weather pipeline.
//!
//! Everything here is already validated: a `WeatherSnapshot` only exists if
//! normalization succeeded, so consumers never see missing fields.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A geocoded place. Coordinates come from the geocoding endpoint and are
/// passed verbatim to the forecast endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    /// First-level administrative area (state, province, region), when the
    /// provider reports one.
    pub admin1: Option<String>,
}

impl Location {
    /// Human-readable label, e.g. "Portland, Oregon, United States".
    pub fn display_name(&self) -> String {
        let mut parts = vec![self.name.as_str()];
        if let Some(admin1) = self.admin1.as_deref() {
            if !admin1.is_empty() && admin1 != self.name {
                parts.push(admin1);
            }
        }
        if !self.country.is_empty() {
            parts.push(self.country.as_str());
        }
        parts.join(", ")
    }
}

/// Conditions at the observation time embedded in the forecast payload.
/// All values are metric: °C, km/h, percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Local time at the queried place.
    pub time: NaiveDateTime,
    pub temperature: f64,
    pub apparent_temperature: f64,
    pub humidity: u8,
    pub wind_speed: f64,
    pub weather_code: u16,
    pub is_day: bool,
}

/// One hour of forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyEntry {
    pub time: NaiveDateTime,
    pub temperature: f64,
    pub precipitation_probability: f64,
    pub wind_speed: f64,
    pub weather_code: u16,
}

/// Today's daily aggregates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub sunrise: NaiveDateTime,
    pub sunset: NaiveDateTime,
    pub temp_max: f64,
    pub temp_min: f64,
    pub uv_index_max: f64,
}

/// Normalized forecast for one place at one moment.
///
/// Invariants: `hourly` holds at most 48 entries, timestamps strictly
/// increasing, all at or after `current.time`. Constructed only by
/// [`crate::normalize::snapshot`]; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// IANA zone name reported by the provider, e.g. "Asia/Kolkata".
    pub timezone: String,
    pub utc_offset_seconds: i32,
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyEntry>,
    pub daily: DailySummary,
}
