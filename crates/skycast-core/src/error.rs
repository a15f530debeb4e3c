//! Application-level error aggregation.
//!
//! Everything the binary can fail with converges here; `user_message()`
//! produces the single line shown to the user.

use thiserror::Error;

use skycast_weather::WeatherError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Weather pipeline error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// User-friendly message for terminal display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Weather(e) => e.user_message(),
            AppError::Config(msg) => format!("Configuration problem: {}", msg),
            AppError::Io(_) => "A file operation failed. Please try again.".to_string(),
            AppError::Other(_) => "An unexpected error occurred. Please try again.".to_string(),
        }
    }
}
