//! エラーページレスポンス
//!
//! `/Home/Error`とパニック時のフォールバックで共通のHTMLを返す。
//! キャッシュさせない（no-store）。

use super::correlation::current_correlation_id;
use crate::views;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};
use std::any::Any;
use tracing::error;
use uuid::Uuid;

/// `Cache-Control` の値
pub const NO_CACHE_CONTROL: &str = "no-store, no-cache";

/// エラーページ
#[derive(Debug, Clone)]
pub struct ErrorPage {
    status: StatusCode,
    correlation_id: String,
}

impl ErrorPage {
    /// 指定ステータスでエラーページを作成
    pub fn new(status: StatusCode, correlation_id: impl Into<String>) -> Self {
        Self {
            status,
            correlation_id: correlation_id.into(),
        }
    }

    /// 表示する相関ID
    pub fn correlation_id(&self) -> &str {
        &self.correlation_id
    }
}

impl IntoResponse for ErrorPage {
    fn into_response(self) -> Response {
        let mut response = match views::render_error(&self.correlation_id) {
            Ok(html) => (self.status, Html(html)).into_response(),
            Err(e) => {
                error!(
                    correlation_id = %self.correlation_id,
                    error = %e,
                    "Failed to render error page"
                );
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Request ID: {}", self.correlation_id),
                )
                    .into_response()
            }
        };
        let headers = response.headers_mut();
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static(NO_CACHE_CONTROL),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        response
    }
}

/// `CatchPanicLayer`用ハンドラー
///
/// パニック内容はログにのみ出力し、画面には相関IDだけを表示する。
/// 相関IDは`correlation_scope`が決定したもの（レスポンスの`x-request-id`と一致）。
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    let correlation_id =
        current_correlation_id().unwrap_or_else(|| Uuid::new_v4().to_string());
    error!(
        correlation_id = %correlation_id,
        panic = %detail,
        "Unhandled error while processing request"
    );

    ErrorPage::new(StatusCode::INTERNAL_SERVER_ERROR, correlation_id).into_response()
}
