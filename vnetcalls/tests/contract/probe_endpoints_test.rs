//! Contract Test: GET /Home/VNetRequest, GET /Home/NonVNetRequest
//!
//! 常に200 text/plainで、ボディはプローブ結果（またはエラー文字列）

use crate::support::{build_app, build_app_with_client, get, refused_url};
use axum::http::{header, StatusCode};
use vnetcalls::http_client::build_client;
use vnetcalls_common::config::HttpClientSettings;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount(server: &MockServer, route: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

fn assert_plain_text(headers: &axum::http::HeaderMap) {
    let content_type = headers.get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/plain"), "{content_type}");
}

/// Scenario A: 200 "ok"
#[tokio::test]
async fn test_vnet_request_returns_upstream_body() {
    let server = MockServer::start().await;
    mount(&server, "/ok", ResponseTemplate::new(200).set_body_string("ok")).await;

    let app = build_app(&format!("{}/ok", server.uri()), "");
    let response = get(app, "/Home/VNetRequest").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_plain_text(&response.headers);
    assert_eq!(response.body, "ok");
}

/// Scenario B: 500 "server error" もボディとして返す
#[tokio::test]
async fn test_vnet_request_passes_through_error_status_body() {
    let server = MockServer::start().await;
    mount(
        &server,
        "/broken",
        ResponseTemplate::new(500).set_body_string("server error"),
    )
    .await;

    let app = build_app(&format!("{}/broken", server.uri()), "");
    let response = get(app, "/Home/VNetRequest").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "server error");
}

/// Scenario C: 接続拒否 → 200 + エラー文字列
#[tokio::test]
async fn test_vnet_request_reports_connection_failure() {
    let url = refused_url().await;

    let response = get(build_app(&url, ""), "/Home/VNetRequest").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_plain_text(&response.headers);
    assert!(!response.body.trim().is_empty());
    assert!(response.body.contains(&url), "{}", response.body);
}

/// Scenario D: 204 → 空ボディ
#[tokio::test]
async fn test_non_vnet_request_returns_empty_body_on_204() {
    let server = MockServer::start().await;
    mount(&server, "/nothing", ResponseTemplate::new(204)).await;

    let app = build_app("", &format!("{}/nothing", server.uri()));
    let response = get(app, "/Home/NonVNetRequest").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "");
}

/// 2つのエンドポイントはそれぞれの設定先だけを呼ぶ
#[tokio::test]
async fn test_each_endpoint_targets_its_own_url() {
    let vnet = MockServer::start().await;
    let public = MockServer::start().await;
    mount(&vnet, "/inside", ResponseTemplate::new(200).set_body_string("inside")).await;
    mount(
        &public,
        "/outside",
        ResponseTemplate::new(200).set_body_string("outside"),
    )
    .await;

    let app = build_app(
        &format!("{}/inside", vnet.uri()),
        &format!("{}/outside", public.uri()),
    );

    let response = get(app.clone(), "/Home/VNetRequest").await;
    assert_eq!(response.body, "inside");

    let response = get(app, "/Home/NonVNetRequest").await;
    assert_eq!(response.body, "outside");
}

/// 未設定（空URL）でもエラー文字列を返し、500にはならない
#[tokio::test]
async fn test_unconfigured_endpoint_returns_error_text() {
    let response = get(build_app("", ""), "/Home/NonVNetRequest").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.body.trim().is_empty());
}

/// タイムアウトもエラー文字列として返る
#[tokio::test]
async fn test_timeout_is_reported_as_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("late")
                .set_delay(std::time::Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = build_client(&HttpClientSettings {
        timeout_secs: 1,
        ..HttpClientSettings::default()
    })
    .unwrap();
    let app = build_app_with_client(client, &format!("{}/slow", server.uri()), "");

    let response = get(app, "/Home/VNetRequest").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_ne!(response.body, "late");
    assert!(!response.body.trim().is_empty());
}
