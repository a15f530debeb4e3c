//! Terminal rendering for a dashboard bundle.
//!
//! Pure string building so every section is testable; `main` just prints
//! the result. Colors use ANSI truecolor escapes fed from the theme's
//! gradient stops.

use skycast_weather::{Alert, CurrentConditions, DailySummary, Dashboard, HourlyEntry, Location};

const RAIN_BAR_WIDTH: usize = 10;

/// Render the whole dashboard.
pub fn dashboard(data: &Dashboard, hours: u8, show_table: bool) -> String {
    let snapshot = &data.snapshot;
    let mut sections: Vec<String> = Vec::new();

    sections.push(header_band(data));
    sections.push(metric_row(&snapshot.current));
    sections.push(summary_line(data));

    if !data.alerts.is_empty() {
        sections.push(alert_lines(&data.alerts));
    }

    let window = visible_window(&snapshot.hourly, hours);
    if show_table {
        sections.push(hourly_table(window));
    } else {
        sections.push(hourly_brief(window));
    }

    sections.push(daily_glance(&snapshot.daily));
    sections.push(rain_bar(next_hour_rain_chance(&snapshot.hourly)));

    if !data.alternates.is_empty() {
        sections.push(alternates_hint(&data.alternates));
    }

    sections.join("\n\n")
}

/// Friendly one-liner in the spirit of a human forecaster.
pub fn friendly_summary(temperature: f64, wind_speed: f64, rain_chance: f64) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if temperature > 38.0 {
        parts.push("Scorching heat today, limit time outside.");
    } else if temperature > 30.0 {
        parts.push("Warm and sunny, sunglasses weather.");
    } else if temperature < 10.0 {
        parts.push("Properly cold, dress in layers.");
    } else if temperature < 18.0 {
        parts.push("On the cool side, good walking weather.");
    }

    if wind_speed > 40.0 {
        parts.push("Strong winds, secure loose items.");
    } else if wind_speed > 20.0 {
        parts.push("Breezy, hold onto your hat.");
    }

    if rain_chance > 70.0 {
        parts.push("Rain is very likely, take an umbrella.");
    } else if rain_chance > 40.0 {
        parts.push("Showers possible later.");
    }

    if parts.is_empty() {
        "Pleasant conditions out there. Enjoy!".to_string()
    } else {
        parts.join(" ")
    }
}

fn header_band(data: &Dashboard) -> String {
    let theme = &data.theme;
    format!(
        "{} {}  {}\n{} · Updated {} ({})",
        swatch(&theme.gradient),
        theme.icon,
        data.location.display_name(),
        theme.message,
        data.snapshot.current.time.format("%H:%M"),
        data.snapshot.timezone,
    )
}

fn metric_row(current: &CurrentConditions) -> String {
    format!(
        "{:.1}°C (feels like {:.1}°C)   humidity {}%   wind {:.0} km/h",
        current.temperature, current.apparent_temperature, current.humidity, current.wind_speed
    )
}

fn summary_line(data: &Dashboard) -> String {
    let current = &data.snapshot.current;
    friendly_summary(
        current.temperature,
        current.wind_speed,
        next_hour_rain_chance(&data.snapshot.hourly),
    )
}

fn alert_lines(alerts: &[Alert]) -> String {
    alerts
        .iter()
        .map(|a| format!("{} {}: {}", a.category.icon(), a.severity.label(), a.message))
        .collect::<Vec<_>>()
        .join("\n")
}

fn visible_window(hourly: &[HourlyEntry], hours: u8) -> &[HourlyEntry] {
    let end = (hours as usize).min(hourly.len());
    &hourly[..end]
}

fn hourly_table(window: &[HourlyEntry]) -> String {
    let mut rows = vec![format!(
        "{:<10} {:>7} {:>6} {:>9}",
        "Time", "Temp", "Rain", "Wind"
    )];
    for entry in window {
        let time = entry.time.format("%a %H:%M").to_string();
        rows.push(format!(
            "{:<10} {:>6.1}° {:>5.0}% {:>4.0} km/h",
            time, entry.temperature, entry.precipitation_probability, entry.wind_speed,
        ));
    }
    rows.join("\n")
}

fn hourly_brief(window: &[HourlyEntry]) -> String {
    let (low, high) = window.iter().fold((f64::MAX, f64::MIN), |(lo, hi), e| {
        (lo.min(e.temperature), hi.max(e.temperature))
    });
    let peak_rain = window
        .iter()
        .map(|e| e.precipitation_probability)
        .fold(0.0_f64, f64::max);

    format!(
        "Next {} hours: {:.0} to {:.0}°C, rain chance up to {:.0}%.",
        window.len(),
        low,
        high,
        peak_rain
    )
}

fn daily_glance(daily: &DailySummary) -> String {
    format!(
        "Today: {:.0}° / {:.0}°   sunrise {}   sunset {}   UV max {:.1}",
        daily.temp_max,
        daily.temp_min,
        daily.sunrise.format("%H:%M"),
        daily.sunset.format("%H:%M"),
        daily.uv_index_max,
    )
}

fn next_hour_rain_chance(hourly: &[HourlyEntry]) -> f64 {
    hourly
        .first()
        .map(|h| h.precipitation_probability)
        .unwrap_or(0.0)
}

fn rain_bar(chance: f64) -> String {
    let chance = chance.clamp(0.0, 100.0);
    let filled = ((chance / 100.0 * RAIN_BAR_WIDTH as f64).round() as usize).min(RAIN_BAR_WIDTH);
    format!(
        "Rain next hour [{}{}] {:.0}%",
        "█".repeat(filled),
        "░".repeat(RAIN_BAR_WIDTH - filled),
        chance
    )
}

fn alternates_hint(alternates: &[Location]) -> String {
    let names: Vec<String> = alternates.iter().map(Location::display_name).collect();
    format!("Other matches: {}", names.join("; "))
}

fn swatch(gradient: &[&str; 3]) -> String {
    gradient
        .iter()
        .filter_map(|stop| hex_to_rgb(stop))
        .map(|(r, g, b)| format!("\x1b[48;2;{};{};{}m  \x1b[0m", r, g, b))
        .collect()
}

fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
