//! Integration tests for `CatalogClient` using wiremock HTTP mocks.

use randbeer_catalog::{normalize_record, CatalogClient, CatalogError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> CatalogClient {
    CatalogClient::new(
        &format!("{}/v2/beers", server.uri()),
        Some("test-key"),
        5,
        "randbeer-test/0.1",
    )
    .expect("client construction should not fail")
}

#[tokio::test]
async fn fetch_random_sends_expected_query_and_parses_first_record() {
    let server = MockServer::start().await;

    let body = json!({
        "currentPage": 1,
        "data": [
            {
                "id": "oeGSxs",
                "name": "Naughty 90",
                "style": { "description": "An India Pale Ale." },
                "labels": { "large": "https://img.example/n90-large.png" },
                "breweries": [{ "name": "Mad Fox Brewing Company", "established": "2010" }],
                "ingredients": { "hops": [{ "name": "Citra" }] }
            },
            { "id": "ignored", "name": "Second Beer" }
        ],
        "status": "success"
    });

    Mock::given(method("GET"))
        .and(path("/v2/beers"))
        .and(query_param("key", "test-key"))
        .and(query_param("order", "random"))
        .and(query_param("randomCount", "1"))
        .and(query_param("withBreweries", "Y"))
        .and(query_param("withIngredients", "Y"))
        .and(query_param("hasLabels", "Y"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let record = test_client(&server)
        .fetch_random()
        .await
        .expect("should parse beer")
        .expect("first record should be present");

    assert_eq!(record.id.as_deref(), Some("oeGSxs"));
    assert_eq!(record.name.as_deref(), Some("Naughty 90"));

    let display = normalize_record(Some(&record));
    assert_eq!(display.beer_name(), "Naughty 90");
    assert_eq!(display.image(), "https://img.example/n90-large.png");
    assert_eq!(display.brewery.name(), "Mad Fox Brewing Company");
    assert!(display.malt.is_empty());
}

#[tokio::test]
async fn fetch_random_returns_none_for_empty_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let result = test_client(&server).fetch_random().await;
    assert!(matches!(result, Ok(None)), "expected Ok(None), got: {result:?}");
}

#[tokio::test]
async fn fetch_random_returns_none_for_null_first_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [null] })))
        .mount(&server)
        .await;

    let result = test_client(&server).fetch_random().await;
    assert!(matches!(result, Ok(None)), "expected Ok(None), got: {result:?}");
}

#[tokio::test]
async fn fetch_random_maps_server_error_to_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errorMessage": "API key could not be found",
            "status": "failure"
        })))
        .mount(&server)
        .await;

    let result = test_client(&server).fetch_random().await;
    assert!(
        matches!(result, Err(CatalogError::Http(ref e)) if e.status().map(|s| s.as_u16()) == Some(401)),
        "expected Http(401), got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_random_rejects_missing_data_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .mount(&server)
        .await;

    let result = test_client(&server).fetch_random().await;
    assert!(
        matches!(result, Err(CatalogError::Deserialize { .. })),
        "expected Deserialize, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_random_rejects_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>relay down</html>"))
        .mount(&server)
        .await;

    let result = test_client(&server).fetch_random().await;
    assert!(
        matches!(result, Err(CatalogError::Deserialize { .. })),
        "expected Deserialize, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_random_rejects_mistyped_first_record() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": [{ "id": "x", "breweries": "none" }] })),
        )
        .mount(&server)
        .await;

    let result = test_client(&server).fetch_random().await;
    assert!(
        matches!(result, Err(CatalogError::Deserialize { .. })),
        "expected Deserialize, got: {result:?}"
    );
}
