//! Shared response handling for the provider clients.

use serde::de::DeserializeOwned;

use crate::error::{FetchError, WeatherError};

/// Decode a provider response, mapping failures onto the pipeline taxonomy:
/// non-2xx becomes `Fetch(Status)`, an undecodable body becomes
/// `Fetch(Parse)`.
pub(crate) async fn decode_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, WeatherError> {
    let status = response.status();

    if status.is_success() {
        response
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()).into())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(FetchError::Status {
            status: status.as_u16(),
            body,
        }
        .into())
    }
}
