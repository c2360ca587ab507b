//! Tests for the request/mapping engine

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> EventApi {
    let config = EventApiConfig::builder()
        .endpoint(server.uri())
        .event_id("42")
        .username("u")
        .password("p")
        .build()
        .unwrap();
    EventApi::new(config).unwrap()
}

#[test]
fn test_new_rejects_invalid_config() {
    let config = EventApiConfig {
        endpoint: String::new(),
        event_id: "42".to_string(),
        username: "u".to_string(),
        password: "p".to_string(),
        proxy: None,
    };
    let err = EventApi::new(config).unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn test_new_rejects_malformed_proxy() {
    let config = EventApiConfig::builder()
        .endpoint("https://api.example")
        .event_id("42")
        .username("u")
        .password("p")
        .proxy("\u{0}")
        .build()
        .unwrap();
    let err = EventApi::new(config).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[tokio::test]
async fn test_sub_camps_request_shape_and_mapping() {
    let server = MockServer::start().await;

    // GET {endpoint}/TapahtumaAlaleirit?Guid=42 with basic auth.
    Mock::given(method("GET"))
        .and(path("/TapahtumaAlaleirit"))
        .and(query_param("Guid", "42"))
        .and(header("authorization", "Basic dTpw"))
        .and(header("accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"Id": 1, "Nimi": "Camp A"}])),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let camps = client.sub_camps(None).await.unwrap();

    assert_eq!(camps.len(), 1);
    assert_eq!(camps[0].id.value(), 1);
    assert_eq!(camps[0].name, "Camp A");
}

#[tokio::test]
async fn test_date_range_adds_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Osallistujat"))
        .and(query_param("Guid", "42"))
        .and(query_param("Alkupvm", "2024-07-01"))
        .and(query_param("Loppupvm", "2024-07-10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let range = DateRange::new("2024-07-01", "2024-07-10");
    let participants = client.participants(Some(&range)).await.unwrap();

    assert!(participants.is_empty());
}

#[tokio::test]
async fn test_server_error_fails_with_request_failed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/TapahtumaKylat"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!([{"Id": 1}])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.villages(None).await.unwrap_err();

    // Status decides, regardless of body content.
    assert!(matches!(
        err,
        Error::RequestFailed { ref resource, status: 500 } if resource == "TapahtumaKylat"
    ));
}

#[tokio::test]
async fn test_non_json_body_fails_with_malformed_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/TapahtumaAlaleirit"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>sorry</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.sub_camps(None).await.unwrap_err();

    assert!(matches!(
        err,
        Error::MalformedResponse { ref resource, .. } if resource == "TapahtumaAlaleirit"
    ));
}

#[tokio::test]
async fn test_schema_violation_fails_with_validation_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/TapahtumaAlaleirit"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"Id": "not-a-number", "Nimi": "X"}])),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.sub_camps(None).await.unwrap_err();

    let Error::Validation(inner) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(inner.field, "Id");
    assert!(inner.payload.is_some());
}

#[tokio::test]
async fn test_collection_requires_array_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/TapahtumaAlaleirit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Id": 1, "Nimi": "X"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.sub_camps(None).await.unwrap_err();

    let Error::Validation(inner) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(inner.field, "<response>");
    assert_eq!(inner.expected, "array");
}

#[tokio::test]
async fn test_single_failing_record_fails_the_whole_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/TapahtumaAlaleirit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"Id": 1, "Nimi": "Camp A"},
            {"Id": 2},
            {"Id": 3, "Nimi": "Camp C"},
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.sub_camps(None).await.unwrap_err();

    let Error::Validation(inner) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(inner.field, "Nimi");
}

#[tokio::test]
async fn test_event_info_is_a_single_object() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Tapahtuma"))
        .and(query_param("Guid", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Nimi": "Suurleiri",
            "NimiSE": null,
            "NimiEN": "Big Camp",
            "Alkupvm": "2024-07-20",
            "Loppupvm": "2024-07-28",
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let info = client.event_info(None).await.unwrap();

    assert_eq!(info.name.fi, "Suurleiri");
    assert_eq!(info.name.se, None);
    assert_eq!(info.name.en.as_deref(), Some("Big Camp"));
}

#[tokio::test]
async fn test_collection_preserves_upstream_order() {
    let server = MockServer::start().await;

    let body: Vec<_> = (0..10)
        .map(|n| json!({"Id": 100 - n, "Nimi": format!("Camp {n}")}))
        .collect();

    Mock::given(method("GET"))
        .and(path("/TapahtumaAlaleirit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(body)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let camps = client.sub_camps(None).await.unwrap();

    assert_eq!(camps.len(), 10);
    let ids: Vec<i64> = camps.iter().map(|c| c.id.value()).collect();
    assert_eq!(ids, (0..10).map(|n| 100 - n).collect::<Vec<i64>>());
}

#[tokio::test]
async fn test_trailing_slash_on_endpoint_is_tolerated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/TapahtumaAlaleirit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let config = EventApiConfig::builder()
        .endpoint(format!("{}/", server.uri()))
        .event_id("42")
        .username("u")
        .password("p")
        .build()
        .unwrap();
    let client = EventApi::new(config).unwrap();

    assert!(client.sub_camps(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_accessors_run_concurrently_on_one_client() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/TapahtumaAlaleirit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"Id": 1, "Nimi": "A"}])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/TapahtumaKylat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"Id": 2, "AlaleiriId": 1, "Nimi": "B"}])),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let (camps, villages) = tokio::join!(client.sub_camps(None), client.villages(None));

    assert_eq!(camps.unwrap().len(), 1);
    assert_eq!(villages.unwrap().len(), 1);
}
