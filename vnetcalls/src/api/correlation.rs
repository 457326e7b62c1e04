//! 相関ID
//!
//! エラーページに表示し、サーバーログと突き合わせるための識別子。
//! 分散トレース（W3C `traceparent`）があればそのtrace-id、なければリクエストごとのIDを使う。
//!
//! [`correlation_scope`]ミドルウェアがリクエストごとに一度だけ決定し、
//! リクエスト拡張とタスクローカルの両方に置く。パニック時のエラーページは
//! タスクローカル側を参照する。

use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use tower_http::request_id::RequestId;
use uuid::Uuid;

/// W3C Trace Context ヘッダー名
pub const TRACEPARENT_HEADER: &str = "traceparent";

tokio::task_local! {
    static CURRENT_CORRELATION_ID: String;
}

/// リクエストに割り当てた相関ID（リクエスト拡張）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationId(pub String);

/// 相関IDを決定し、後続の処理をそのIDのスコープ内で実行する
///
/// `SetRequestIdLayer`より内側、`CatchPanicLayer`より外側に置くこと。
pub async fn correlation_scope(mut request: Request, next: Next) -> Response {
    let id = correlation_id(request.headers(), request.extensions().get::<RequestId>());
    request.extensions_mut().insert(CorrelationId(id.clone()));

    CURRENT_CORRELATION_ID.scope(id, next.run(request)).await
}

/// 処理中リクエストの相関ID（[`correlation_scope`]の外では`None`）
pub fn current_correlation_id() -> Option<String> {
    CURRENT_CORRELATION_ID.try_with(|id| id.clone()).ok()
}

/// 相関IDを決定する（常に非空）
pub fn correlation_id(headers: &HeaderMap, request_id: Option<&RequestId>) -> String {
    if let Some(traceparent) = headers
        .get(TRACEPARENT_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_traceparent)
    {
        return traceparent.to_string();
    }

    request_id
        .and_then(|id| id.header_value().to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// `traceparent`の形式を検証し、有効ならtrace-idを返す
///
/// `version-traceid(32hex)-parentid(16hex)-flags(2hex)`。parent-idは呼び出し元の
/// スパンなので相関IDには含めない。
/// version `ff` と全ゼロのtrace-id/parent-idは無効。
pub fn parse_traceparent(value: &str) -> Option<&str> {
    let value = value.trim();
    let mut parts = value.split('-');
    let version = parts.next()?;
    let trace_id = parts.next()?;
    let parent_id = parts.next()?;
    let flags = parts.next()?;

    if !is_lower_hex(version, 2) || version == "ff" {
        return None;
    }
    // version 00 はフィールド追加を許さない
    if version == "00" && parts.next().is_some() {
        return None;
    }
    if !is_lower_hex(trace_id, 32) || trace_id.bytes().all(|b| b == b'0') {
        return None;
    }
    if !is_lower_hex(parent_id, 16) || parent_id.bytes().all(|b| b == b'0') {
        return None;
    }
    if !is_lower_hex(flags, 2) {
        return None;
    }

    Some(trace_id)
}

fn is_lower_hex(part: &str, len: usize) -> bool {
    part.len() == len && part.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
