//! Integration tests for the Overpass geodata adapter
#![allow(clippy::expect_used)]

use application::error::ApplicationError;
use application::ports::{GeodataPort, GeodataQuery, QuerySelector};
use domain::elements::Element;
use domain::value_objects::{BoundingBox, TagFilter};
use infrastructure::OverpassAdapter;
use integration_overpass::OverpassConfig;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn adapter(server: &MockServer) -> OverpassAdapter {
    OverpassAdapter::new(OverpassConfig::for_testing(server.uri()))
        .expect("adapter should initialize")
}

fn water_query() -> GeodataQuery {
    GeodataQuery::new(
        QuerySelector::NodeOnly,
        vec![TagFilter::new("amenity", "drinking_water")],
        BoundingBox::lisbon(),
    )
}

#[tokio::test]
async fn query_decodes_elements_through_the_port() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "elements": [
                {"type": "node", "id": 1, "lat": 38.7, "lon": -9.1},
                {"type": "way", "id": 10, "nodes": [1]}
            ]
        })))
        .mount(&server)
        .await;

    let elements = adapter(&server)
        .query(water_query())
        .await
        .expect("query should succeed");

    assert_eq!(elements.len(), 2);
    assert!(matches!(elements[0], Element::Node(_)));
    assert!(matches!(elements[1], Element::Way(_)));
}

#[tokio::test]
async fn upstream_failure_maps_to_external_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/interpreter"))
        .respond_with(ResponseTemplate::new(504))
        .mount(&server)
        .await;

    let err = adapter(&server).query(water_query()).await.unwrap_err();

    assert!(matches!(err, ApplicationError::ExternalService(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn health_check_probes_the_status_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    assert!(adapter(&server).is_healthy().await);
}

#[tokio::test]
async fn health_check_fails_when_status_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    assert!(!adapter(&server).is_healthy().await);
}
