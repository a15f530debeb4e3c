//! Integration tests for the full query pipeline against mocked endpoints.

use skycast_weather::{AlertCategory, FetchError, Severity, WeatherError, WeatherPipeline};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Two ranked candidates for "Paris": the French capital first, then the
/// Texan namesake.
fn paris_candidates() -> serde_json::Value {
    serde_json::json!({
        "results": [
            {
                "name": "Paris",
                "latitude": 48.8566,
                "longitude": 2.3522,
                "country": "France",
                "admin1": "Île-de-France"
            },
            {
                "name": "Paris",
                "latitude": 33.6609,
                "longitude": -95.5555,
                "country": "United States",
                "admin1": "Texas"
            }
        ]
    })
}

/// A 72-hour forecast starting at local midnight, observed at 14:30.
fn forecast_body() -> serde_json::Value {
    let times: Vec<String> = (0..72)
        .map(|i| format!("2024-06-{:02}T{:02}:00", 1 + i / 24, i % 24))
        .collect();
    serde_json::json!({
        "timezone": "Europe/Paris",
        "utc_offset_seconds": 7200,
        "current": {
            "time": "2024-06-01T14:30",
            "temperature_2m": 36.0,
            "apparent_temperature": 41.0,
            "relative_humidity_2m": 40,
            "wind_speed_10m": 10.0,
            "weather_code": 0,
            "is_day": 1
        },
        "hourly": {
            "time": times,
            "temperature_2m": vec![30.0; 72],
            "precipitation_probability": vec![10.0; 72],
            "wind_speed_10m": vec![8.0; 72],
            "weather_code": vec![0; 72]
        },
        "daily": {
            "time": ["2024-06-01", "2024-06-02", "2024-06-03"],
            "sunrise": ["2024-06-01T05:43", "2024-06-02T05:42", "2024-06-03T05:42"],
            "sunset": ["2024-06-01T21:34", "2024-06-02T21:35", "2024-06-03T21:36"],
            "temperature_2m_max": [37.1, 35.0, 33.2],
            "temperature_2m_min": [24.4, 23.0, 22.1],
            "uv_index_max": [8.5, 7.0, 6.5]
        }
    })
}

async fn mock_geocoder(body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_dashboard_uses_first_ranked_candidate() {
    let geocoding = mock_geocoder(paris_candidates()).await;

    // The forecast mock only answers for the French capital's coordinates:
    // querying anything else fails the test with a 404.
    let forecast = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("latitude", "48.8566"))
        .and(query_param("longitude", "2.3522"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(&forecast)
        .await;

    let pipeline = WeatherPipeline::with_endpoints(&geocoding.uri(), &forecast.uri(), 5);
    let dashboard = pipeline.run("Paris").await.unwrap();

    assert_eq!(dashboard.location.country, "France");
    assert_eq!(dashboard.alternates.len(), 1);
    assert_eq!(dashboard.alternates[0].admin1.as_deref(), Some("Texas"));

    assert!(dashboard.snapshot.hourly.len() <= 48);
    assert!(dashboard
        .snapshot
        .hourly
        .windows(2)
        .all(|pair| pair[0].time < pair[1].time));

    // 41°C apparent and UV 8.5 trip heat and UV warnings; wind and rain stay
    // quiet.
    let categories: Vec<AlertCategory> = dashboard.alerts.iter().map(|a| a.category).collect();
    assert_eq!(categories, vec![AlertCategory::Heat, AlertCategory::Uv]);
    assert!(dashboard
        .alerts
        .iter()
        .all(|a| a.severity == Severity::Warning));

    assert_eq!(dashboard.theme.id, "clear-day");
}

#[tokio::test]
async fn test_not_found_skips_the_forecast_stage() {
    let geocoding = mock_geocoder(serde_json::json!({"generationtime_ms": 0.4})).await;

    let forecast = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .expect(0)
        .mount(&forecast)
        .await;

    let pipeline = WeatherPipeline::with_endpoints(&geocoding.uri(), &forecast.uri(), 5);
    let result = pipeline.run("Erewhon").await;

    match result {
        Err(WeatherError::NotFound(place)) => assert_eq!(place, "Erewhon"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_blank_query_fails_before_any_request() {
    let pipeline = WeatherPipeline::with_endpoints("http://127.0.0.1:1", "http://127.0.0.1:1", 1);
    let result = pipeline.run("   ").await;
    assert!(matches!(result, Err(WeatherError::InvalidInput(_))));
}

#[tokio::test]
async fn test_incomplete_payload_stops_the_pipeline() {
    let geocoding = mock_geocoder(paris_candidates()).await;

    let mut body = forecast_body();
    body["daily"].as_object_mut().unwrap().remove("uv_index_max");

    let forecast = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&forecast)
        .await;

    let pipeline = WeatherPipeline::with_endpoints(&geocoding.uri(), &forecast.uri(), 5);
    let result = pipeline.run("Paris").await;

    match result {
        Err(WeatherError::Incomplete(msg)) => assert!(msg.contains("uv_index_max")),
        other => panic!("expected Incomplete, got {:?}", other),
    }
}

#[tokio::test]
async fn test_provider_outage_surfaces_as_fetch_error() {
    let geocoding = mock_geocoder(paris_candidates()).await;

    let forecast = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&forecast)
        .await;

    let pipeline = WeatherPipeline::with_endpoints(&geocoding.uri(), &forecast.uri(), 5);
    let result = pipeline.run("Paris").await;

    match result {
        Err(err @ WeatherError::Fetch(FetchError::Status { status: 502, .. })) => {
            assert!(err.is_retryable());
        }
        other => panic!("expected Fetch(Status), got {:?}", other),
    }
}
