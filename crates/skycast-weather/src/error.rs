//! Pipeline error types.

use thiserror::Error;

/// Failure while talking to the weather provider.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    Parse(String),
}

impl FetchError {
    /// User-friendly error message for display.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Network error. Check your connection and try again.".to_string(),
            Self::Status { status, .. } if *status >= 500 => {
                "The weather service is having trouble. Please try again later.".to_string()
            }
            Self::Status { .. } => {
                "The weather service rejected the request. Please try again.".to_string()
            }
            Self::Parse(_) => {
                "Received an unexpected response from the weather service.".to_string()
            }
        }
    }
}

/// Errors produced by the weather pipeline.
///
/// Every stage fails fast: the first error aborts the query and reaches the
/// caller unchanged. Use `user_message()` for display.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No location found for {0:?}")]
    NotFound(String),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Incomplete weather data: {0}")]
    Incomplete(String),
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        WeatherError::Fetch(FetchError::Network(err))
    }
}

impl WeatherError {
    /// User-friendly error message for display.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(msg) => format!("Invalid input: {}", msg),
            Self::NotFound(place) => {
                format!("Couldn't find \"{}\". Check the spelling and try again.", place)
            }
            Self::Fetch(e) => e.user_message(),
            Self::Incomplete(_) => {
                "The weather service returned incomplete data. Please try again.".to_string()
            }
        }
    }

    /// Whether retrying the same query could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Fetch(FetchError::Network(_)) => true,
            Self::Fetch(FetchError::Status { status, .. }) => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}
