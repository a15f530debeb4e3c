//! Visual theme selection from WMO weather codes.
//!
//! Codes are grouped into coarse conditions by an ordered range table, then
//! mapped to a fixed theme record per condition and day/night phase. Unknown
//! codes never fail: they get the neutral theme so a dashboard can always
//! render something.

use serde::Serialize;

/// Coarse condition buckets for theming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Clear,
    Cloudy,
    Fog,
    Rain,
    Snow,
    Storm,
}

/// Inclusive WMO code ranges in ascending order. Codes falling in a gap have
/// no condition and theme neutrally.
const CONDITION_RANGES: &[(u16, u16, Condition)] = &[
    (0, 0, Condition::Clear),
    (1, 3, Condition::Cloudy),
    (45, 48, Condition::Fog),
    (51, 67, Condition::Rain),
    (71, 77, Condition::Snow),
    (80, 82, Condition::Rain),
    (85, 86, Condition::Snow),
    (95, 99, Condition::Storm),
];

/// Everything the presentation layer needs to paint one condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub id: &'static str,
    /// Gradient stops, top to bottom.
    pub gradient: [&'static str; 3],
    pub icon: &'static str,
    pub message: &'static str,
}

const NEUTRAL: Theme = Theme {
    id: "neutral",
    gradient: ["#6b7280", "#4b5563", "#374151"],
    icon: "🌍",
    message: "Conditions unknown",
};

/// Map a WMO code to its condition bucket, if it has one.
pub fn condition_for(code: u16) -> Option<Condition> {
    CONDITION_RANGES
        .iter()
        .find(|(start, end, _)| (*start..=*end).contains(&code))
        .map(|(_, _, condition)| *condition)
}

/// Pick the theme for a weather code and day/night phase.
pub fn select(weather_code: u16, is_day: bool) -> Theme {
    match condition_for(weather_code) {
        Some(condition) if is_day => day_theme(condition),
        Some(condition) => night_theme(condition),
        None => NEUTRAL,
    }
}

fn day_theme(condition: Condition) -> Theme {
    match condition {
        Condition::Clear => Theme {
            id: "clear-day",
            gradient: ["#657c87", "#9e978a", "#c78868"],
            icon: "☀️",
            message: "Clear skies",
        },
        Condition::Cloudy => Theme {
            id: "cloudy-day",
            gradient: ["#90A5BA", "#5B7BAA", "#124E82"],
            icon: "⛅",
            message: "Clouds drifting by",
        },
        Condition::Fog => Theme {
            id: "fog-day",
            gradient: ["#ccb297", "#ae9377", "#231b12"],
            icon: "🌫️",
            message: "Low visibility in fog",
        },
        Condition::Rain => Theme {
            id: "rain-day",
            gradient: ["#4e5d7a", "#5b7ac0", "#8ec5fc"],
            icon: "🌧️",
            message: "Rain on the radar",
        },
        Condition::Snow => Theme {
            id: "snow-day",
            gradient: ["#92e6f6", "#c3e7ff", "#ffffff"],
            icon: "❄️",
            message: "Snow is falling",
        },
        Condition::Storm => Theme {
            id: "storm-day",
            gradient: ["#2d3748", "#4b5563", "#111827"],
            icon: "⛈️",
            message: "Thunderstorms nearby",
        },
    }
}

fn night_theme(condition: Condition) -> Theme {
    match condition {
        Condition::Clear => Theme {
            id: "clear-night",
            gradient: ["#0f2027", "#203a43", "#2c5364"],
            icon: "🌙",
            message: "Clear night",
        },
        Condition::Cloudy => Theme {
            id: "cloudy-night",
            gradient: ["#1e2a3a", "#2c3e50", "#4b6587"],
            icon: "☁️",
            message: "Cloudy night",
        },
        Condition::Fog => Theme {
            id: "fog-night",
            gradient: ["#2b2b2b", "#3e3b32", "#5a5348"],
            icon: "🌫️",
            message: "Fog through the night",
        },
        Condition::Rain => Theme {
            id: "rain-night",
            gradient: ["#1f2633", "#2c3a52", "#46628c"],
            icon: "🌧️",
            message: "Rain overnight",
        },
        Condition::Snow => Theme {
            id: "snow-night",
            gradient: ["#2e3b4e", "#46627f", "#8fa8bf"],
            icon: "❄️",
            message: "Snow overnight",
        },
        Condition::Storm => Theme {
            id: "storm-night",
            gradient: ["#10141c", "#1f2733", "#2d3748"],
            icon: "⛈️",
            message: "Storms overnight",
        },
    }
}
