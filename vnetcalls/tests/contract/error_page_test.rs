//! Contract Test: GET /Home/Error と未処理エラー時のエラーページ

use crate::support::{build_app, get, get_with_headers};
use axum::{http::header, http::StatusCode, routing::get as get_route, Router};
use vnetcalls::api::{self, error::NO_CACHE_CONTROL};

const TRACEPARENT: &str = "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01";
const TRACE_ID: &str = "4bf92f3577b34da6a3ce929d0e0e4736";

/// キャッシュ禁止ヘッダーが付く
#[tokio::test]
async fn test_error_page_is_not_cacheable() {
    let response = get(build_app("", ""), "/Home/Error").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers.get(header::CACHE_CONTROL).unwrap(),
        NO_CACHE_CONTROL
    );
    assert_eq!(response.headers.get(header::PRAGMA).unwrap(), "no-cache");
    let content_type = response.headers.get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
}

/// トレースが無い場合はリクエストIDを表示する
#[tokio::test]
async fn test_error_page_shows_request_id_without_trace() {
    let response = get(build_app("", ""), "/Home/Error").await;

    let request_id = response
        .headers
        .get("x-request-id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(!request_id.is_empty());
    assert!(response.body.contains(&request_id), "{}", response.body);
}

/// traceparentがあればそれを相関IDとして表示する
#[tokio::test]
async fn test_error_page_prefers_trace_context() {
    let response = get_with_headers(
        build_app("", ""),
        "/Home/Error",
        &[("traceparent", TRACEPARENT), ("x-request-id", "req-7")],
    )
    .await;

    assert!(response.body.contains(TRACE_ID), "{}", response.body);
    assert!(!response.body.contains(TRACEPARENT));
    assert!(!response.body.contains("req-7"));
}

/// 不正なtraceparentは無視してリクエストIDにフォールバック
#[tokio::test]
async fn test_error_page_ignores_invalid_trace_context() {
    let response = get_with_headers(
        build_app("", ""),
        "/Home/Error",
        &[("traceparent", "not-a-trace"), ("x-request-id", "req-8")],
    )
    .await;

    assert!(response.body.contains("req-8"));
    assert!(!response.body.contains("not-a-trace"));
}

async fn boom() -> &'static str {
    panic!("database password is hunter2")
}

/// 本番と同じミドルウェアを通したパニック用ルーター
fn panicking_app() -> Router {
    api::with_middleware(Router::new().route("/boom", get_route(boom)))
}

/// パニックは詳細を隠したエラーページ（500）になり、レスポンスと同じIDを表示する
#[tokio::test]
async fn test_panic_page_shows_response_request_id() {
    let response = get_with_headers(panicking_app(), "/boom", &[("x-request-id", "req-42")]).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.headers.get("x-request-id").unwrap(), "req-42");
    assert_eq!(
        response.headers.get(header::CACHE_CONTROL).unwrap(),
        NO_CACHE_CONTROL
    );
    assert!(response.body.contains("req-42"), "{}", response.body);
    assert!(!response.body.contains("hunter2"));
}

/// リクエストIDを送らなくても、付与されたIDがページに出る
#[tokio::test]
async fn test_panic_page_shows_generated_request_id() {
    let response = get(panicking_app(), "/boom").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let request_id = response
        .headers
        .get("x-request-id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(!request_id.is_empty());
    assert!(response.body.contains(&request_id), "{}", response.body);
}

/// パニック時もtraceparentのトレースIDを優先する
#[tokio::test]
async fn test_panic_page_prefers_trace_context() {
    let response = get_with_headers(
        panicking_app(),
        "/boom",
        &[("traceparent", TRACEPARENT), ("x-request-id", "req-43")],
    )
    .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.body.contains(TRACE_ID), "{}", response.body);
    assert!(!response.body.contains("req-43"));
}
