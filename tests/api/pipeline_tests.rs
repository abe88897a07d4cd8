//! End-to-end tests: gateway -> resolver over real sockets, providers stubbed.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cep_weather::config::ServiceRole;

use crate::common::{body_bytes, gateway_settings, resolver_settings, spawn_app, TestApp};

async fn gateway_in_front_of_resolver(stubs: &MockServer) -> TestApp {
    let resolver_addr =
        spawn_app(ServiceRole::Resolver, resolver_settings(&stubs.uri(), None)).await;
    TestApp::gateway(&gateway_settings(&format!("http://{}", resolver_addr)))
}

#[tokio::test]
async fn test_zipcode_to_temperature() {
    let stubs = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/01001000/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"localidade": "São Paulo"})))
        .expect(1)
        .mount(&stubs)
        .await;

    let gateway = gateway_in_front_of_resolver(&stubs).await;
    let response = gateway.post_json("/cep", r#"{"cep":"01001000"}"#).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        String::from_utf8(body_bytes(response).await.to_vec()).unwrap(),
        r#"{"city":"São Paulo","temp_C":22.5,"temp_F":72.5,"temp_K":295.65}"#
    );
}

#[tokio::test]
async fn test_not_found_passes_through_gateway() {
    let stubs = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/99999999/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"erro": true})))
        .mount(&stubs)
        .await;

    let gateway = gateway_in_front_of_resolver(&stubs).await;
    let response = gateway.post_json("/cep", r#"{"cep":"99999999"}"#).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        &body_bytes(response).await[..],
        br#"{"message":"can not find zipcode"}"#
    );
}

#[tokio::test]
async fn test_weather_failure_passes_through_gateway() {
    let stubs = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/01001000/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"localidade": "São Paulo"})))
        .mount(&stubs)
        .await;
    Mock::given(method("GET"))
        .and(path("/current.json"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&stubs)
        .await;

    let resolver_addr = spawn_app(
        ServiceRole::Resolver,
        resolver_settings(&stubs.uri(), Some("test-key")),
    )
    .await;
    let gateway = TestApp::gateway(&gateway_settings(&format!("http://{}", resolver_addr)));
    let response = gateway.post_json("/cep", r#"{"cep":"01001000"}"#).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        &body_bytes(response).await[..],
        br#"{"message":"internal server error"}"#
    );
}
