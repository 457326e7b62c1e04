//! HTTPルーティング
//!
//! ルート、リクエストID付与、トレース、パニック時のエラーページ。

/// 相関ID（traceparent / x-request-id）
pub mod correlation;
/// エラーページ
pub mod error;
/// Homeコントローラー
pub mod home;

use crate::AppState;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

/// アプリケーション全体のルーターを作成
pub fn create_app(state: AppState) -> Router {
    with_middleware(
        Router::new()
            .route("/", get(home::index))
            .route("/Home", get(home::index))
            .route("/Home/Index", get(home::index))
            .route("/Home/VNetRequest", get(home::vnet_request))
            .route("/Home/NonVNetRequest", get(home::non_vnet_request))
            .route("/Home/Error", get(home::error))
            .fallback(not_found)
            .with_state(state),
    )
}

/// 共通ミドルウェアを適用する
///
/// 外側から: リクエストID付与 → トレース → リクエストID返却 → 相関ID決定 → パニック捕捉。
pub fn with_middleware(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                }),
            )
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(middleware::from_fn(correlation::correlation_scope))
            .layer(CatchPanicLayer::custom(error::handle_panic)),
    )
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
