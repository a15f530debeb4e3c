//! Payload normalization: raw provider blocks into a validated snapshot.
//!
//! Pure and deterministic: "now" is the observation time embedded in the
//! payload, never the wall clock, so the same payload always yields the same
//! snapshot.

use chrono::NaiveDateTime;

use crate::api::{CurrentBlock, DailyBlock, ForecastPayload, HourlyBlock};
use crate::error::WeatherError;
use crate::types::{CurrentConditions, DailySummary, HourlyEntry, WeatherSnapshot};

/// Hard cap on the hourly horizon, counted from the payload's observation
/// time.
pub const HOURLY_HORIZON: usize = 48;

const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Build a [`WeatherSnapshot`] from a raw payload.
///
/// Fails with `Incomplete` when any required field is absent or unusable;
/// no partial snapshot ever escapes.
pub fn snapshot(payload: &ForecastPayload) -> Result<WeatherSnapshot, WeatherError> {
    let timezone = require(payload.timezone.clone(), "timezone")?;
    let utc_offset_seconds = require(payload.utc_offset_seconds, "utc_offset_seconds")?;

    let current = payload
        .current
        .as_ref()
        .map(normalize_current)
        .ok_or_else(|| missing("current"))??;

    let hourly = payload
        .hourly
        .as_ref()
        .map(|block| normalize_hourly(block, current.time))
        .ok_or_else(|| missing("hourly"))??;

    let daily = payload
        .daily
        .as_ref()
        .map(normalize_daily)
        .ok_or_else(|| missing("daily"))??;

    Ok(WeatherSnapshot {
        timezone,
        utc_offset_seconds,
        current,
        hourly,
        daily,
    })
}

fn normalize_current(block: &CurrentBlock) -> Result<CurrentConditions, WeatherError> {
    let time_raw = require(block.time.as_deref(), "current.time")?;
    let humidity = require(block.relative_humidity_2m, "current.relative_humidity_2m")?;

    Ok(CurrentConditions {
        time: parse_minute(time_raw, "current.time")?,
        temperature: require(block.temperature_2m, "current.temperature_2m")?,
        apparent_temperature: require(
            block.apparent_temperature,
            "current.apparent_temperature",
        )?,
        humidity: humidity.round().clamp(0.0, 100.0) as u8,
        wind_speed: require(block.wind_speed_10m, "current.wind_speed_10m")?,
        weather_code: require(block.weather_code, "current.weather_code")?,
        is_day: require(block.is_day, "current.is_day")? != 0,
    })
}

fn normalize_hourly(
    block: &HourlyBlock,
    now: NaiveDateTime,
) -> Result<Vec<HourlyEntry>, WeatherError> {
    let times = require(block.time.as_ref(), "hourly.time")?;
    let temperatures = require(block.temperature_2m.as_ref(), "hourly.temperature_2m")?;
    let rain_chances = require(
        block.precipitation_probability.as_ref(),
        "hourly.precipitation_probability",
    )?;
    let wind_speeds = require(block.wind_speed_10m.as_ref(), "hourly.wind_speed_10m")?;
    let codes = require(block.weather_code.as_ref(), "hourly.weather_code")?;

    let len = times.len();
    if [
        temperatures.len(),
        rain_chances.len(),
        wind_speeds.len(),
        codes.len(),
    ]
    .iter()
    .any(|&l| l != len)
    {
        return Err(WeatherError::Incomplete(
            "hourly arrays are misaligned".to_string(),
        ));
    }

    let mut entries: Vec<HourlyEntry> = Vec::with_capacity(HOURLY_HORIZON);
    for (i, raw_time) in times.iter().enumerate() {
        let time = parse_minute(raw_time, "hourly.time")?;
        if time < now {
            continue;
        }
        if entries.len() == HOURLY_HORIZON {
            break;
        }
        if let Some(last) = entries.last() {
            if time <= last.time {
                return Err(WeatherError::Incomplete(
                    "hourly timestamps are not strictly increasing".to_string(),
                ));
            }
        }

        entries.push(HourlyEntry {
            time,
            temperature: value_at(temperatures, i, "hourly.temperature_2m")?,
            precipitation_probability: value_at(
                rain_chances,
                i,
                "hourly.precipitation_probability",
            )?,
            wind_speed: value_at(wind_speeds, i, "hourly.wind_speed_10m")?,
            weather_code: value_at(codes, i, "hourly.weather_code")?,
        });
    }

    if entries.is_empty() {
        return Err(WeatherError::Incomplete(
            "no hourly entries at or after the current time".to_string(),
        ));
    }

    Ok(entries)
}

fn normalize_daily(block: &DailyBlock) -> Result<DailySummary, WeatherError> {
    // Parallel per-day arrays; today is index 0.
    let sunrise_raw = first_value(block.sunrise.as_ref(), "daily.sunrise")?;
    let sunset_raw = first_value(block.sunset.as_ref(), "daily.sunset")?;

    Ok(DailySummary {
        sunrise: parse_minute(&sunrise_raw, "daily.sunrise")?,
        sunset: parse_minute(&sunset_raw, "daily.sunset")?,
        temp_max: first_value(block.temperature_2m_max.as_ref(), "daily.temperature_2m_max")?,
        temp_min: first_value(block.temperature_2m_min.as_ref(), "daily.temperature_2m_min")?,
        uv_index_max: first_value(block.uv_index_max.as_ref(), "daily.uv_index_max")?,
    })
}

fn missing(field: &str) -> WeatherError {
    WeatherError::Incomplete(format!("missing required field {}", field))
}

fn require<T>(value: Option<T>, field: &str) -> Result<T, WeatherError> {
    value.ok_or_else(|| missing(field))
}

fn value_at<T: Copy>(values: &[Option<T>], index: usize, field: &str) -> Result<T, WeatherError> {
    values
        .get(index)
        .copied()
        .flatten()
        .ok_or_else(|| WeatherError::Incomplete(format!("missing value in {} at {}", field, index)))
}

fn first_value<T: Clone>(
    values: Option<&Vec<Option<T>>>,
    field: &str,
) -> Result<T, WeatherError> {
    values
        .and_then(|v| v.first())
        .and_then(Clone::clone)
        .ok_or_else(|| missing(field))
}

fn parse_minute(raw: &str, field: &str) -> Result<NaiveDateTime, WeatherError> {
    NaiveDateTime::parse_from_str(raw, MINUTE_FORMAT)
        .map_err(|_| WeatherError::Incomplete(format!("unusable timestamp in {}: {:?}", field, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn hour(offset: i64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + Duration::hours(offset)
    }

    fn stamp(t: NaiveDateTime) -> String {
        t.format("%Y-%m-%dT%H:%M").to_string()
    }

    /// Payload with `hours` hourly entries starting at local midnight and the
    /// current observation at 14:30.
    fn base_value(hours: usize) -> serde_json::Value {
        let times: Vec<String> = (0..hours).map(|i| stamp(hour(i as i64))).collect();
        serde_json::json!({
            "timezone": "Asia/Kolkata",
            "utc_offset_seconds": 19800,
            "current": {
                "time": "2024-06-01T14:30",
                "temperature_2m": 34.1,
                "apparent_temperature": 38.9,
                "relative_humidity_2m": 58,
                "wind_speed_10m": 12.0,
                "weather_code": 1,
                "is_day": 1
            },
            "hourly": {
                "time": times,
                "temperature_2m": vec![30.0; hours],
                "precipitation_probability": vec![10.0; hours],
                "wind_speed_10m": vec![8.0; hours],
                "weather_code": vec![1; hours]
            },
            "daily": {
                "sunrise": ["2024-06-01T05:43"],
                "sunset": ["2024-06-01T18:34"],
                "temperature_2m_max": [36.2],
                "temperature_2m_min": [28.4],
                "uv_index_max": [8.5]
            }
        })
    }

    fn payload(value: serde_json::Value) -> ForecastPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_snapshot_carries_current_values_unconverted() {
        let snap = snapshot(&payload(base_value(72))).unwrap();

        assert_eq!(snap.timezone, "Asia/Kolkata");
        assert_eq!(snap.current.temperature, 34.1);
        assert_eq!(snap.current.apparent_temperature, 38.9);
        assert_eq!(snap.current.humidity, 58);
        assert!(snap.current.is_day);
        assert_eq!(snap.daily.uv_index_max, 8.5);
        assert_eq!(snap.daily.sunrise, hour(5) + Duration::minutes(43));
    }

    #[test]
    fn test_snapshot_truncates_to_48_future_hours() {
        // 72 hours from midnight, observation at 14:30: entries 15:00..
        let snap = snapshot(&payload(base_value(72))).unwrap();

        assert_eq!(snap.hourly.len(), 48);
        assert_eq!(snap.hourly[0].time, hour(15));
        assert_eq!(snap.hourly[47].time, hour(15 + 47));
        assert!(snap
            .hourly
            .windows(2)
            .all(|pair| pair[0].time < pair[1].time));
    }

    #[test]
    fn test_snapshot_keeps_all_when_fewer_than_48_remain() {
        // 24 hours total leaves 9 entries at or after 14:30; no padding.
        let snap = snapshot(&payload(base_value(24))).unwrap();

        assert_eq!(snap.hourly.len(), 9);
        assert_eq!(snap.hourly[0].time, hour(15));
        assert_eq!(snap.hourly[8].time, hour(23));
    }

    #[test]
    fn test_hour_aligned_observation_keeps_that_hour() {
        let mut value = base_value(72);
        value["current"]["time"] = serde_json::json!("2024-06-01T14:00");

        let snap = snapshot(&payload(value)).unwrap();
        assert_eq!(snap.hourly[0].time, hour(14));
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let p = payload(base_value(72));
        let first = snapshot(&p).unwrap();
        let second = snapshot(&p).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_current_block() {
        let mut value = base_value(72);
        value.as_object_mut().unwrap().remove("current");

        let err = snapshot(&payload(value)).unwrap_err();
        match err {
            WeatherError::Incomplete(msg) => assert!(msg.contains("current")),
            other => panic!("expected Incomplete, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_apparent_temperature() {
        let mut value = base_value(72);
        value["current"]
            .as_object_mut()
            .unwrap()
            .remove("apparent_temperature");

        let err = snapshot(&payload(value)).unwrap_err();
        match err {
            WeatherError::Incomplete(msg) => assert!(msg.contains("apparent_temperature")),
            other => panic!("expected Incomplete, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_daily_uv_index() {
        let mut value = base_value(72);
        value["daily"].as_object_mut().unwrap().remove("uv_index_max");

        let err = snapshot(&payload(value)).unwrap_err();
        match err {
            WeatherError::Incomplete(msg) => assert!(msg.contains("uv_index_max")),
            other => panic!("expected Incomplete, got {:?}", other),
        }
    }

    #[test]
    fn test_null_value_inside_kept_range() {
        let mut value = base_value(72);
        // Hour 20 is inside the kept window.
        value["hourly"]["temperature_2m"][20] = serde_json::Value::Null;

        let err = snapshot(&payload(value)).unwrap_err();
        assert!(matches!(err, WeatherError::Incomplete(_)));
    }

    #[test]
    fn test_null_value_in_dropped_past_is_ignored() {
        let mut value = base_value(72);
        // Hour 3 is before the 14:30 observation and never consulted.
        value["hourly"]["temperature_2m"][3] = serde_json::Value::Null;

        assert!(snapshot(&payload(value)).is_ok());
    }

    #[test]
    fn test_misaligned_hourly_arrays() {
        let mut value = base_value(72);
        value["hourly"]["wind_speed_10m"]
            .as_array_mut()
            .unwrap()
            .pop();

        let err = snapshot(&payload(value)).unwrap_err();
        match err {
            WeatherError::Incomplete(msg) => assert!(msg.contains("misaligned")),
            other => panic!("expected Incomplete, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_timestamp_rejected() {
        let mut value = base_value(72);
        let dup = value["hourly"]["time"][19].clone();
        value["hourly"]["time"][20] = dup;

        let err = snapshot(&payload(value)).unwrap_err();
        match err {
            WeatherError::Incomplete(msg) => assert!(msg.contains("increasing")),
            other => panic!("expected Incomplete, got {:?}", other),
        }
    }

    #[test]
    fn test_all_hours_in_past_is_incomplete() {
        let mut value = base_value(12);
        value["current"]["time"] = serde_json::json!("2024-06-02T09:00");

        let err = snapshot(&payload(value)).unwrap_err();
        match err {
            WeatherError::Incomplete(msg) => assert!(msg.contains("no hourly entries")),
            other => panic!("expected Incomplete, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_hourly_arrays_are_incomplete() {
        let snap = snapshot(&payload(base_value(0)));
        assert!(matches!(snap, Err(WeatherError::Incomplete(_))));
    }

    #[test]
    fn test_unknown_weather_code_flows_through() {
        let mut value = base_value(72);
        value["current"]["weather_code"] = serde_json::json!(9999);

        let snap = snapshot(&payload(value)).unwrap();
        assert_eq!(snap.current.weather_code, 9999);
    }

    #[test]
    fn test_night_observation() {
        let mut value = base_value(72);
        value["current"]["is_day"] = serde_json::json!(0);

        let snap = snapshot(&payload(value)).unwrap();
        assert!(!snap.current.is_day);
    }

    #[test]
    fn test_fractional_humidity_rounds() {
        let mut value = base_value(72);
        value["current"]["relative_humidity_2m"] = serde_json::json!(57.6);

        let snap = snapshot(&payload(value)).unwrap();
        assert_eq!(snap.current.humidity, 58);
    }
}
