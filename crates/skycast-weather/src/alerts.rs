//! Alert derivation from a normalized snapshot.
//!
//! Four independent rules, evaluated and reported in a fixed order: heat,
//! rain, wind, UV. Each produces at most one alert; warning thresholds win
//! over info thresholds. A quiet day yields no alerts at all.

use serde::{Deserialize, Serialize};

use crate::types::WeatherSnapshot;

const HEAT_WARNING_C: f64 = 40.0;
const HEAT_INFO_C: f64 = 35.0;
const RAIN_WARNING_PCT: f64 = 70.0;
const RAIN_INFO_PCT: f64 = 40.0;
const WIND_WARNING_KMH: f64 = 40.0;
const WIND_INFO_KMH: f64 = 25.0;
const UV_WARNING: f64 = 8.0;
const UV_INFO: f64 = 6.0;

/// How many upcoming hours the rain rule inspects.
const RAIN_LOOKAHEAD_HOURS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertCategory {
    Heat,
    Rain,
    Wind,
    Uv,
}

impl AlertCategory {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Heat => "🌡️",
            Self::Rain => "☔",
            Self::Wind => "💨",
            Self::Uv => "🧴",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "Heads-up",
            Self::Warning => "Warning",
        }
    }
}

/// One derived advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub category: AlertCategory,
    pub severity: Severity,
    pub message: String,
}

/// Scan a snapshot and return the active alerts in display order.
pub fn derive(snapshot: &WeatherSnapshot) -> Vec<Alert> {
    [
        heat_alert(snapshot),
        rain_alert(snapshot),
        wind_alert(snapshot),
        uv_alert(snapshot),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn heat_alert(snapshot: &WeatherSnapshot) -> Option<Alert> {
    let feels = snapshot.current.apparent_temperature;
    if feels >= HEAT_WARNING_C {
        Some(alert(
            AlertCategory::Heat,
            Severity::Warning,
            format!("Extreme heat: feels like {:.0}°C. Limit time outdoors.", feels),
        ))
    } else if feels >= HEAT_INFO_C {
        Some(alert(
            AlertCategory::Heat,
            Severity::Info,
            format!("Hot out: feels like {:.0}°C. Keep water handy.", feels),
        ))
    } else {
        None
    }
}

fn rain_alert(snapshot: &WeatherSnapshot) -> Option<Alert> {
    let peak = snapshot
        .hourly
        .iter()
        .take(RAIN_LOOKAHEAD_HOURS)
        .map(|h| h.precipitation_probability)
        .fold(0.0_f64, f64::max);

    if peak >= RAIN_WARNING_PCT {
        Some(alert(
            AlertCategory::Rain,
            Severity::Warning,
            format!(
                "Heavy rain likely: up to {:.0}% chance in the next {} hours.",
                peak, RAIN_LOOKAHEAD_HOURS
            ),
        ))
    } else if peak >= RAIN_INFO_PCT {
        Some(alert(
            AlertCategory::Rain,
            Severity::Info,
            format!(
                "Showers possible: up to {:.0}% chance in the next {} hours.",
                peak, RAIN_LOOKAHEAD_HOURS
            ),
        ))
    } else {
        None
    }
}

fn wind_alert(snapshot: &WeatherSnapshot) -> Option<Alert> {
    let speed = snapshot.current.wind_speed;
    if speed >= WIND_WARNING_KMH {
        Some(alert(
            AlertCategory::Wind,
            Severity::Warning,
            format!("Strong winds at {:.0} km/h. Secure loose items.", speed),
        ))
    } else if speed >= WIND_INFO_KMH {
        Some(alert(
            AlertCategory::Wind,
            Severity::Info,
            format!("Breezy: winds around {:.0} km/h.", speed),
        ))
    } else {
        None
    }
}

fn uv_alert(snapshot: &WeatherSnapshot) -> Option<Alert> {
    let uv = snapshot.daily.uv_index_max;
    if uv >= UV_WARNING {
        Some(alert(
            AlertCategory::Uv,
            Severity::Warning,
            format!("Very high UV today (index {:.1}). Sunscreen is a must.", uv),
        ))
    } else if uv >= UV_INFO {
        Some(alert(
            AlertCategory::Uv,
            Severity::Info,
            format!("High UV today (index {:.1}). Consider sun protection.", uv),
        ))
    } else {
        None
    }
}

fn alert(category: AlertCategory, severity: Severity, message: String) -> Alert {
    Alert {
        category,
        severity,
        message,
    }
}
