//! Integration tests for the wttr.in client against a mock HTTP server.
//!
//! These pin the response classification: 2xx with the expected shape
//! is the only success; any other status reads as "city not found";
//! unusable 2xx bodies are malformed; blank queries never hit the
//! network at all.

use nalssi_core::{CityQuery, FetchError, WeatherProvider, WttrConfig, WttrProvider};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{any, method, path, query_param},
};

/// A trimmed-down `format=j1` body. The extra fields mirror what
/// wttr.in actually sends and must be ignored by the decoder.
fn sample_j1_body() -> serde_json::Value {
    serde_json::json!({
        "current_condition": [{
            "temp_C": "18",
            "temp_F": "64",
            "FeelsLikeC": "17",
            "FeelsLikeF": "63",
            "humidity": "73",
            "weatherDesc": [{ "value": "Partly cloudy" }],
            "windspeedKmph": "10",
            "winddir16Point": "SSW",
            "observation_time": "03:12 AM"
        }],
        "nearest_area": [{
            "areaName": [{ "value": "Yeosu" }],
            "country": [{ "value": "South Korea" }]
        }],
        "weather": [{
            "date": "2026-08-05",
            "mintempC": "14",
            "maxtempC": "21",
            "avgtempC": "18",
            "hourly": []
        }]
    })
}

fn test_provider(mock_server: &MockServer) -> WttrProvider {
    WttrProvider::new(WttrConfig { base_url: mock_server.uri() })
}

#[tokio::test]
async fn fetch_extracts_the_displayed_metrics() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Yeosu"))
        .and(query_param("format", "j1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_j1_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = test_provider(&mock_server);
    let report =
        provider.fetch(&CityQuery::new("Yeosu")).await.expect("sample body must decode");

    assert_eq!(report.temp_c, "18");
    assert_eq!(report.feels_like_c, "17");
    assert_eq!(report.condition, "Partly cloudy");
    assert_eq!(report.wind_speed_kmph, "10");
    assert_eq!(report.min_temp_c, "14");
    assert_eq!(report.max_temp_c, "21");
}

#[tokio::test]
async fn multi_word_cities_are_requested_with_a_joined_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/New+York"))
        .and(query_param("format", "j1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_j1_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = test_provider(&mock_server);
    let result = provider.fetch(&CityQuery::new("New York")).await;

    assert!(result.is_ok(), "expected success, got: {result:?}");
}

#[tokio::test]
async fn not_found_names_the_typed_city() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(404).set_body_string("Unknown location"))
        .mount(&mock_server)
        .await;

    let provider = test_provider(&mock_server);
    let err = provider.fetch(&CityQuery::new("여수")).await.unwrap_err();

    match err {
        FetchError::NotFound { display_name } => assert_eq!(display_name, "여수"),
        other => panic!("expected NotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn server_errors_also_read_as_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let provider = test_provider(&mock_server);
    let err = provider.fetch(&CityQuery::new("Yeosu")).await.unwrap_err();

    assert!(matches!(err, FetchError::NotFound { .. }), "got: {err:?}");
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&mock_server)
        .await;

    let provider = test_provider(&mock_server);
    let err = provider.fetch(&CityQuery::new("Yeosu")).await.unwrap_err();

    assert!(matches!(err, FetchError::Malformed(_)), "got: {err:?}");
}

#[tokio::test]
async fn missing_current_condition_is_malformed() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({ "current_condition": [], "weather": [] });
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let provider = test_provider(&mock_server);
    let err = provider.fetch(&CityQuery::new("Yeosu")).await.unwrap_err();

    assert!(matches!(err, FetchError::Malformed(_)), "got: {err:?}");
}

#[tokio::test]
async fn blank_query_never_hits_the_network() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_j1_body()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let provider = test_provider(&mock_server);
    let err = provider.fetch(&CityQuery::new("   ")).await.unwrap_err();

    assert!(matches!(err, FetchError::EmptyQuery), "got: {err:?}");
}
