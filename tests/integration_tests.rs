//! Integration tests using a mock HTTP server
//!
//! Exercise the full flow through the public surface: configuration →
//! HTTP request → status check → schema validation → domain mapping.

use chrono::NaiveDate;
use kuksa_event_api::{DateRange, Error, EventApi, EventApiConfig};
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

// ============================================================================
// Request shape
// ============================================================================

#[tokio::test]
async fn test_every_request_carries_auth_and_event_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/Ryhmat"))
        .and(query_param("Guid", "42"))
        .and(header("authorization", "Basic dTpw"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.local_groups(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_date_range_bounds_pass_through_verbatim() {
    let server = MockServer::start().await;

    // Bounds are not reformatted, a full date-time stays a date-time.
    Mock::given(method("GET"))
        .and(path("/OsallistujatMaksut"))
        .and(query_param("Alkupvm", "2024-07-01T06:00:00"))
        .and(query_param("Loppupvm", "2024-07-10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let range = DateRange::new("2024-07-01T06:00:00", "2024-07-10");
    assert!(client
        .participant_payments(Some(&range))
        .await
        .unwrap()
        .is_empty());
}

// ============================================================================
// Mapping through the public surface
// ============================================================================

#[tokio::test]
async fn test_participant_birth_date_null_and_value() {
    let server = MockServer::start().await;

    let base = json!({
        "Id": 1,
        "Jasennro": null,
        "Etunimi": "Aino",
        "Sukunimi": "Virtanen",
        "Partionimi": null,
        "Katuosoite": null,
        "Postinumero": null,
        "Postitoimipaikka": null,
        "Postimaa": null,
        "Lisaosoite": null,
        "Puhelinnumero": null,
        "Email": null,
        "Erityisruokavalio": null,
        "Syntymaaika": null,
        "Ika": null,
        "Ilmoittautumispvm": "2024-06-01T08:00:00",
        "TahoJotaEdustaa": null,
        "EdustusorganisaationPiiri": null,
        "Majoittuminen": null,
        "MajoittuuLippukunnassa": null,
        "MajoittumisenLisatiedot": null,
        "HuoltajanNimi": null,
        "HuoltajanPuhelinnumero": null,
        "HuoltajanEmail": null,
        "RyhmaId": null,
        "AlaleiriId": null,
        "KylaId": null,
        "LeirilippukuntaId": null,
        "Perunut": false,
    });
    let mut with_birth_date = base.clone();
    with_birth_date["Id"] = json!(2);
    with_birth_date["Syntymaaika"] = json!("1990-05-01");

    Mock::given(method("GET"))
        .and(path("/Osallistujat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([base, with_birth_date])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let participants = client.participants(None).await.unwrap();

    assert_eq!(participants.len(), 2);
    assert_eq!(participants[0].birth_date, None);
    assert_eq!(
        participants[1].birth_date,
        Some(NaiveDate::from_ymd_opt(1990, 5, 1).unwrap())
    );
    // Nulls are absent, not sentinels.
    assert_eq!(participants[0].member_number, None);
    assert_eq!(participants[0].guardian.name, None);
    assert_eq!(participants[0].camp_group, None);
}

#[tokio::test]
async fn test_localized_name_three_language_bundle() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/TapahtumaMaksunPaaryhmat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"Id": 1, "Nimi": "Leiri", "NimiSE": null, "NimiEN": null},
            {"Id": 2, "Nimi": "Leiri", "NimiSE": "Läger", "NimiEN": "Camp"},
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let groups = client.payment_groups(None).await.unwrap();

    assert_eq!(groups[0].name.fi, "Leiri");
    assert_eq!(groups[0].name.se, None);
    assert_eq!(groups[0].name.en, None);
    assert_eq!(groups[1].name.se.as_deref(), Some("Läger"));
    assert_eq!(groups[1].name.en.as_deref(), Some("Camp"));
}

#[tokio::test]
async fn test_association_resources_map_to_id_pairs() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/LeirilippukunnatLisavalinnat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"LeirilippukuntaId": 4, "LisavalintaId": 7},
            {"LeirilippukuntaId": 4, "LisavalintaId": 9},
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let links = client.camp_group_extra_selections(None).await.unwrap();

    assert_eq!(links.len(), 2);
    assert_eq!(links[0].from.value(), 4);
    assert_eq!(links[1].to.value(), 9);
}

// ============================================================================
// Failure modes
// ============================================================================

#[tokio::test]
async fn test_http_error_status_is_request_failed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/TapahtumaLisavalinnat"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.extra_selections(None).await.unwrap_err();

    assert!(matches!(
        err,
        Error::RequestFailed { ref resource, status: 404 } if resource == "TapahtumaLisavalinnat"
    ));
}

#[tokio::test]
async fn test_validation_failure_reports_field_and_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/TapahtumaKylat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"Id": 1, "AlaleiriId": null, "Nimi": "Kylä"},
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.villages(None).await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("AlaleiriId"));
    assert!(message.contains("payload"));
    assert!(message.contains("Kylä"));
}

#[tokio::test]
async fn test_transport_failure_surfaces_as_transport_error() {
    // Connect to a port nothing listens on.
    let config = EventApiConfig::builder()
        .endpoint("http://127.0.0.1:9")
        .event_id("42")
        .username("u")
        .password("p")
        .build()
        .unwrap();
    let client = EventApi::new(config).unwrap();

    let err = client.sub_camps(None).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
