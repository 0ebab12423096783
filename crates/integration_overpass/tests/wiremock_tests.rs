//! Integration tests for the Overpass client against a mock HTTP server

use domain::elements::Element;
use domain::value_objects::{BoundingBox, TagFilter};
use integration_overpass::{
    HttpOverpassClient, OverpassClient, OverpassConfig, OverpassError, QuerySpec, Selector,
};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpOverpassClient {
    HttpOverpassClient::new(OverpassConfig::for_testing(server.uri()))
        .expect("client creation should succeed")
}

fn node_spec() -> QuerySpec {
    QuerySpec::new(
        Selector::Node,
        vec![TagFilter::new("amenity", "drinking_water")],
        BoundingBox::lisbon(),
    )
}

fn union_spec() -> QuerySpec {
    QuerySpec::new(
        Selector::WayRelation,
        vec![
            TagFilter::new("leisure", "park"),
            TagFilter::new("leisure", "garden"),
        ],
        BoundingBox::lisbon(),
    )
}

#[tokio::test]
async fn node_query_is_sent_as_get_and_decoded() {
    let server = MockServer::start().await;
    let spec = node_spec();

    Mock::given(method("GET"))
        .and(path("/interpreter"))
        .and(query_param("data", spec.to_ql()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "elements": [
                {"type": "node", "id": 1, "lat": 38.71, "lon": -9.14},
                {"type": "node", "id": 2, "lat": 38.72, "lon": -9.15}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let elements = client.execute(&spec).await.expect("query should succeed");

    assert_eq!(elements.len(), 2);
    match &elements[0] {
        Element::Node(node) => {
            assert_eq!(node.id, 1);
            assert!((node.lat - 38.71).abs() < f64::EPSILON);
        },
        other => panic!("expected node, got {other:?}"),
    }
}

#[tokio::test]
async fn union_query_is_posted_as_form() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/interpreter"))
        .and(body_string_contains("data="))
        .and(body_string_contains("leisure"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "elements": [
                {"type": "way", "id": 10, "nodes": [1, 2]},
                {"type": "node", "id": 1, "lat": 38.7, "lon": -9.1},
                {"type": "node", "id": 2, "lat": 38.8, "lon": -9.2}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let elements = client
        .execute(&union_spec())
        .await
        .expect("query should succeed");

    assert_eq!(elements.len(), 3);
    assert!(matches!(elements[0], Element::Way(_)));
}

#[tokio::test]
async fn undecodable_entries_are_skipped_not_fatal() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "elements": [
                {"type": "node", "id": 1, "lat": 38.7, "lon": -9.1},
                {"type": "area", "id": 99},
                {"type": "node", "id": 2},
                {"type": "relation", "id": 5, "members": [
                    {"type": "way", "ref": 10, "role": "outer"}
                ]}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let elements = client
        .execute(&node_spec())
        .await
        .expect("query should succeed");

    // The area and the coordinate-less node are dropped.
    assert_eq!(elements.len(), 2);
    assert!(matches!(elements[1], Element::Relation(_)));
}

#[tokio::test]
async fn empty_elements_array_yields_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"elements": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let elements = client
        .execute(&node_spec())
        .await
        .expect("query should succeed");
    assert!(elements.is_empty());
}

#[tokio::test]
async fn rate_limit_maps_to_dedicated_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/interpreter"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.execute(&node_spec()).await.unwrap_err();
    assert!(matches!(err, OverpassError::RateLimitExceeded));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn server_error_maps_to_service_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/interpreter"))
        .respond_with(ResponseTemplate::new(504))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.execute(&node_spec()).await.unwrap_err();
    assert!(matches!(err, OverpassError::ServiceUnavailable(_)));
}

#[tokio::test]
async fn client_error_maps_to_request_failed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/interpreter"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.execute(&node_spec()).await.unwrap_err();
    assert!(matches!(err, OverpassError::RequestFailed(_)));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn malformed_body_maps_to_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/interpreter"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.execute(&node_spec()).await.unwrap_err();
    assert!(matches!(err, OverpassError::ParseError(_)));
}

#[tokio::test]
async fn health_check_reports_reachable_api() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Connected as: 1234"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.is_healthy().await);
}

#[tokio::test]
async fn health_check_reports_unreachable_api() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(!client.is_healthy().await);
}
