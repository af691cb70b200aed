mod common;

use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use company_proxy::domain::format::V1_CONTENT_TYPE;

#[tokio::test]
async fn test_v1_company_without_closing_date() {
    let us = MockServer::start().await;
    let ru = MockServer::start().await;
    common::mount_v1(&us, "123", common::v1_body("Acme Corp", None)).await;

    let server = common::create_server_for(&us, &ru);
    let response = server
        .get("/company")
        .add_query_param("id", "123")
        .add_query_param("country_iso", "us")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "id": "123",
        "name": "Acme Corp",
        "active": true
    }));
}

#[tokio::test]
async fn test_v1_company_closed_in_the_past() {
    let us = MockServer::start().await;
    let ru = MockServer::start().await;
    common::mount_v1(
        &us,
        "123",
        common::v1_body("Acme Corp", Some("2022-01-28T00:00:00Z")),
    )
    .await;

    let server = common::create_server_for(&us, &ru);
    let response = server
        .get("/company")
        .add_query_param("id", "123")
        .add_query_param("country_iso", "us")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "id": "123",
        "name": "Acme Corp",
        "active": false,
        "activeUntil": "2022-01-28T00:00:00Z"
    }));
}

#[tokio::test]
async fn test_v1_company_closing_in_the_future() {
    let us = MockServer::start().await;
    let ru = MockServer::start().await;
    common::mount_v1(
        &us,
        "777",
        common::v1_body("Future Ltd", Some("2999-01-01T03:00:00+03:00")),
    )
    .await;

    let server = common::create_server_for(&us, &ru);
    let response = server
        .get("/company")
        .add_query_param("id", "777")
        .add_query_param("country_iso", "us")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["active"], true);
    assert_eq!(json["activeUntil"], "2999-01-01T00:00:00Z");
}

#[tokio::test]
async fn test_v2_company_dissolved() {
    let us = MockServer::start().await;
    let ru = MockServer::start().await;
    common::mount_v2(
        &ru,
        "456",
        common::v2_body("Company V2", Some("2022-12-31T00:00:00Z")),
    )
    .await;

    let server = common::create_server_for(&us, &ru);
    let response = server
        .get("/company")
        .add_query_param("id", "456")
        .add_query_param("country_iso", "ru")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "id": "456",
        "name": "Company V2",
        "active": false,
        "activeUntil": "2022-12-31T00:00:00Z"
    }));
}

#[tokio::test]
async fn test_unknown_country_never_calls_a_backend() {
    let us = MockServer::start().await;
    let ru = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&us)
        .await;

    let server = common::create_server_for(&us, &ru);
    let response = server
        .get("/company")
        .add_query_param("id", "123")
        .add_query_param("country_iso", "fr")
        .expect_failure()
        .await;

    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "country_not_found");
    assert!(json["error"]["message"].as_str().unwrap().contains("fr"));
}

#[tokio::test]
async fn test_country_code_is_case_sensitive() {
    let us = MockServer::start().await;
    let ru = MockServer::start().await;

    let server = common::create_server_for(&us, &ru);
    let response = server
        .get("/company")
        .add_query_param("id", "123")
        .add_query_param("country_iso", "US")
        .expect_failure()
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "country_not_found");
}

#[tokio::test]
async fn test_company_not_found() {
    let us = MockServer::start().await;
    let ru = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/companies/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&us)
        .await;

    let server = common::create_server_for(&us, &ru);
    let response = server
        .get("/company")
        .add_query_param("id", "missing")
        .add_query_param("country_iso", "us")
        .expect_failure()
        .await;

    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"]["code"], "company_not_found");
}

#[tokio::test]
async fn test_backend_server_error() {
    let us = MockServer::start().await;
    let ru = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&us)
        .await;

    let server = common::create_server_for(&us, &ru);
    let response = server
        .get("/company")
        .add_query_param("id", "123")
        .add_query_param("country_iso", "us")
        .expect_failure()
        .await;

    response.assert_status_internal_server_error();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "backend_server_error");
    assert!(json["error"]["message"].as_str().unwrap().contains("503"));
}

#[tokio::test]
async fn test_backend_timeout() {
    let us = MockServer::start().await;
    let ru = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            common::company_response(common::v1_body("Slow", None), V1_CONTENT_TYPE)
                .set_delay(common::BACKEND_TIMEOUT + Duration::from_millis(800)),
        )
        .mount(&us)
        .await;

    let server = common::create_server_for(&us, &ru);
    let response = server
        .get("/company")
        .add_query_param("id", "123")
        .add_query_param("country_iso", "us")
        .expect_failure()
        .await;

    response.assert_status(axum::http::StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "connectivity_timeout"
    );
}

#[tokio::test]
async fn test_unreachable_backend() {
    let us = MockServer::start().await;
    let ru = MockServer::start().await;
    let registry = common::create_test_registry(&[
        ("us", us.uri().as_str()),
        ("ru", ru.uri().as_str()),
        ("de", "http://127.0.0.1:1"),
    ]);
    let server = common::create_test_server(common::create_test_service(registry));

    let response = server
        .get("/company")
        .add_query_param("id", "123")
        .add_query_param("country_iso", "de")
        .expect_failure()
        .await;

    response.assert_status(axum::http::StatusCode::GATEWAY_TIMEOUT);
}

#[tokio::test]
async fn test_unknown_content_type() {
    let us = MockServer::start().await;
    let ru = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(common::company_response(
            common::v1_body("Acme Corp", None),
            "application/json",
        ))
        .mount(&us)
        .await;

    let server = common::create_server_for(&us, &ru);
    let response = server
        .get("/company")
        .add_query_param("id", "123")
        .add_query_param("country_iso", "us")
        .expect_failure()
        .await;

    response.assert_status(axum::http::StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "unexpected_content_type"
    );
}

#[tokio::test]
async fn test_malformed_backend_body() {
    let us = MockServer::start().await;
    let ru = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(common::company_response(
            "{\"cn\":".to_string(),
            V1_CONTENT_TYPE,
        ))
        .mount(&us)
        .await;

    let server = common::create_server_for(&us, &ru);
    let response = server
        .get("/company")
        .add_query_param("id", "123")
        .add_query_param("country_iso", "us")
        .expect_failure()
        .await;

    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.json::<Value>()["error"]["code"],
        "response_format_error"
    );
}

#[tokio::test]
async fn test_missing_query_parameter() {
    let us = MockServer::start().await;
    let ru = MockServer::start().await;

    let server = common::create_server_for(&us, &ru);
    let response = server
        .get("/company")
        .add_query_param("id", "123")
        .expect_failure()
        .await;

    response.assert_status_bad_request();
    assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_empty_query_parameter() {
    let us = MockServer::start().await;
    let ru = MockServer::start().await;

    let server = common::create_server_for(&us, &ru);
    let response = server
        .get("/company")
        .add_query_param("id", "")
        .add_query_param("country_iso", "us")
        .expect_failure()
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_second_lookup_is_served_from_cache() {
    let us = MockServer::start().await;
    let ru = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/companies/123"))
        .respond_with(common::company_response(
            common::v1_body("Acme Corp", None),
            V1_CONTENT_TYPE,
        ))
        .expect(1)
        .mount(&us)
        .await;

    let server = common::create_server_for(&us, &ru);

    let first = server
        .get("/company")
        .add_query_param("id", "123")
        .add_query_param("country_iso", "us")
        .await;
    let second = server
        .get("/company")
        .add_query_param("id", "123")
        .add_query_param("country_iso", "us")
        .await;

    first.assert_status_ok();
    second.assert_status_ok();
    assert_eq!(first.json::<Value>(), second.json::<Value>());

    us.verify().await;
}

#[tokio::test]
async fn test_same_id_in_different_countries_is_cached_separately() {
    let us = MockServer::start().await;
    let ru = MockServer::start().await;
    common::mount_v1(&us, "42", common::v1_body("Us Company", None)).await;
    common::mount_v2(&ru, "42", common::v2_body("Ru Company", None)).await;

    let server = common::create_server_for(&us, &ru);

    let us_response = server
        .get("/company")
        .add_query_param("id", "42")
        .add_query_param("country_iso", "us")
        .await;
    let ru_response = server
        .get("/company")
        .add_query_param("id", "42")
        .add_query_param("country_iso", "ru")
        .await;

    assert_eq!(us_response.json::<Value>()["name"], "Us Company");
    assert_eq!(ru_response.json::<Value>()["name"], "Ru Company");
}

#[tokio::test]
async fn test_failed_lookup_is_not_cached() {
    let us = MockServer::start().await;
    let ru = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/companies/123"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&us)
        .await;
    common::mount_v1(&us, "123", common::v1_body("Acme Corp", None)).await;

    let server = common::create_server_for(&us, &ru);

    server
        .get("/company")
        .add_query_param("id", "123")
        .add_query_param("country_iso", "us")
        .expect_failure()
        .await
        .assert_status_internal_server_error();

    let response = server
        .get("/company")
        .add_query_param("id", "123")
        .add_query_param("country_iso", "us")
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["name"], "Acme Corp");
}
