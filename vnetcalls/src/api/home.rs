//! Homeコントローラー
//!
//! トップページ、2つの疎通確認エンドポイント、エラーページ。

use super::correlation::{correlation_id, CorrelationId};
use super::error::ErrorPage;
use crate::probe::{describe_error, EndpointProbe};
use crate::{views, AppState};
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Extension,
};
use std::time::Instant;
use tower_http::request_id::RequestId;
use tracing::{debug, error, info, warn};

/// GET /, /Home, /Home/Index
///
/// 描画に失敗した場合は500のエラーページを返す。
pub async fn index(
    State(state): State<AppState>,
    correlation: Option<Extension<CorrelationId>>,
) -> Response {
    match views::render_index(&state.test_request) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            let id = correlation
                .map(|Extension(CorrelationId(id))| id)
                .unwrap_or_else(|| correlation_id(&HeaderMap::new(), None));
            error!(correlation_id = %id, error = %e, "Failed to render index page");
            ErrorPage::new(StatusCode::INTERNAL_SERVER_ERROR, id).into_response()
        }
    }
}

/// GET /Home/VNetRequest
pub async fn vnet_request(State(state): State<AppState>) -> String {
    run_probe(&state.probe, "vnet", &state.test_request.vnet_endpoint).await
}

/// GET /Home/NonVNetRequest
pub async fn non_vnet_request(State(state): State<AppState>) -> String {
    run_probe(
        &state.probe,
        "non_vnet",
        &state.test_request.non_vnet_endpoint,
    )
    .await
}

/// GET /Home/Error
///
/// 相関IDは`correlation_scope`が決定したものを使う。
pub async fn error(
    headers: HeaderMap,
    correlation: Option<Extension<CorrelationId>>,
    request_id: Option<Extension<RequestId>>,
) -> ErrorPage {
    let id = match correlation {
        Some(Extension(CorrelationId(id))) => id,
        None => correlation_id(&headers, request_id.as_ref().map(|Extension(id)| id)),
    };
    let page = ErrorPage::new(StatusCode::OK, id);
    debug!(correlation_id = %page.correlation_id(), "Rendering error page");
    page
}

/// プローブを実行し、結果を常にテキストで返す
///
/// 失敗時もHTTPステータスは200のまま、エラー内容をボディに入れる。
async fn run_probe(probe: &EndpointProbe, target: &'static str, url: &str) -> String {
    let started = Instant::now();
    match probe.probe(url).await {
        Ok(body) => {
            info!(
                target_name = target,
                url = %url,
                bytes = body.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Probe succeeded"
            );
            body
        }
        Err(err) => {
            let text = describe_error(&err);
            warn!(
                target_name = target,
                url = %url,
                timeout = err.is_timeout(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                error = %text,
                "Probe failed"
            );
            text
        }
    }
}
