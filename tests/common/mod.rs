#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use company_proxy::application::services::CompanyService;
use company_proxy::domain::backend_registry::BackendRegistry;
use company_proxy::domain::format::{V1_CONTENT_TYPE, V2_CONTENT_TYPE};
use company_proxy::infrastructure::backend::HttpFetcher;
use company_proxy::infrastructure::cache::{ExpiryPolicy, MemoryCache};
use company_proxy::routes;
use company_proxy::state::AppState;

pub const BACKEND_TIMEOUT: Duration = Duration::from_millis(200);

pub fn create_test_registry(routes: &[(&str, &str)]) -> BackendRegistry {
    routes
        .iter()
        .map(|(country, url)| (country.to_string(), Url::parse(url).unwrap()))
        .collect()
}

pub fn create_test_service(registry: BackendRegistry) -> CompanyService {
    let fetcher = HttpFetcher::new(BACKEND_TIMEOUT).unwrap();
    let cache = MemoryCache::new(ExpiryPolicy::default());
    CompanyService::new(registry, Arc::new(fetcher), Arc::new(cache))
}

pub fn create_test_server(service: CompanyService) -> TestServer {
    let state = AppState::new(Arc::new(service));
    TestServer::new(routes::router(state)).unwrap()
}

/// Server routing `us` to a v1 backend and `ru` to a v2 backend.
pub fn create_server_for(us: &MockServer, ru: &MockServer) -> TestServer {
    let registry = create_test_registry(&[("us", us.uri().as_str()), ("ru", ru.uri().as_str())]);
    create_test_server(create_test_service(registry))
}

pub fn v1_body(name: &str, closed_on: Option<&str>) -> String {
    match closed_on {
        Some(closed_on) => format!(
            r#"{{"cn":"{name}","created_on":"2020-01-01T00:00:00Z","closed_on":"{closed_on}"}}"#
        ),
        None => format!(r#"{{"cn":"{name}","created_on":"2020-01-01T00:00:00Z"}}"#),
    }
}

pub fn v2_body(name: &str, dissolved_on: Option<&str>) -> String {
    match dissolved_on {
        Some(dissolved_on) => format!(
            r#"{{"company_name":"{name}","tin":"123456789","dissolved_on":"{dissolved_on}"}}"#
        ),
        None => format!(r#"{{"company_name":"{name}","tin":"123456789"}}"#),
    }
}

pub fn company_response(body: String, content_type: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.into_bytes(), content_type)
}

pub async fn mount_v1(server: &MockServer, id: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(format!("/companies/{id}")))
        .respond_with(company_response(body, V1_CONTENT_TYPE))
        .mount(server)
        .await;
}

pub async fn mount_v2(server: &MockServer, id: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(format!("/companies/{id}")))
        .respond_with(company_response(body, V2_CONTENT_TYPE))
        .mount(server)
        .await;
}
