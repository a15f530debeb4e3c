//! Raw Open-Meteo response types.
//!
//! These mirror the wire format and stay lenient on purpose: scalar values
//! are `Option` so that an absent field surfaces as a normalization error
//! naming the field, instead of a blanket JSON error. Structural problems
//! (wrong types, truncated bodies) still fail at deserialization.

use serde::Deserialize;

use crate::types::Location;

/// Geocoding search response. `results` is omitted entirely when the query
/// matches nothing.
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    pub results: Option<Vec<GeocodingRecord>>,
}

/// One candidate from the geocoding endpoint, in relevance order.
#[derive(Debug, Deserialize)]
pub struct GeocodingRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub admin1: Option<String>,
}

/// Forecast response for one coordinate pair.
#[derive(Debug, Deserialize)]
pub struct ForecastPayload {
    pub timezone: Option<String>,
    pub utc_offset_seconds: Option<i32>,
    pub current: Option<CurrentBlock>,
    pub hourly: Option<HourlyBlock>,
    pub daily: Option<DailyBlock>,
}

/// `current` block: scalar observations at the provider's reference time.
/// Timestamps are local ISO minutes ("2024-06-01T14:30").
#[derive(Debug, Deserialize)]
pub struct CurrentBlock {
    pub time: Option<String>,
    pub temperature_2m: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub relative_humidity_2m: Option<f64>,
    pub wind_speed_10m: Option<f64>,
    pub weather_code: Option<u16>,
    pub is_day: Option<u8>,
}

/// `hourly` block: parallel arrays keyed by field name, aligned by index.
/// Individual values may be `null`, so the inner elements are `Option` too.
#[derive(Debug, Deserialize)]
pub struct HourlyBlock {
    pub time: Option<Vec<String>>,
    pub temperature_2m: Option<Vec<Option<f64>>>,
    pub precipitation_probability: Option<Vec<Option<f64>>>,
    pub wind_speed_10m: Option<Vec<Option<f64>>>,
    pub weather_code: Option<Vec<Option<u16>>>,
}

/// `daily` block: parallel arrays with one entry per forecast day.
/// Index 0 is today.
#[derive(Debug, Deserialize)]
pub struct DailyBlock {
    pub time: Option<Vec<String>>,
    pub sunrise: Option<Vec<Option<String>>>,
    pub sunset: Option<Vec<Option<String>>>,
    pub temperature_2m_max: Option<Vec<Option<f64>>>,
    pub temperature_2m_min: Option<Vec<Option<f64>>>,
    pub uv_index_max: Option<Vec<Option<f64>>>,
}

impl From<GeocodingRecord> for Location {
    fn from(record: GeocodingRecord) -> Self {
        Self {
            name: record.name,
            latitude: record.latitude,
            longitude: record.longitude,
            country: record.country.unwrap_or_default(),
            admin1: record.admin1,
        }
    }
}
