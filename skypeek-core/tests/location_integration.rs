//! Integration tests for the geolocation probe against a wiremock server.

use skypeek_core::location;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn probe_returns_coordinates_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "lat": 48.85,
            "lon": 2.35
        })))
        .expect(1)
        .mount(&server)
        .await;

    let coords = location::probe_with_base_url(&server.uri()).await.unwrap();
    assert_eq!(coords.latitude, 48.85);
    assert_eq!(coords.longitude, 2.35);
}

#[tokio::test]
async fn probe_swallows_service_denials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "fail",
            "message": "private range"
        })))
        .mount(&server)
        .await;

    assert!(location::probe_with_base_url(&server.uri()).await.is_none());
}

#[tokio::test]
async fn probe_swallows_unreachable_hosts() {
    assert!(location::probe_with_base_url("http://127.0.0.1:9").await.is_none());
}
