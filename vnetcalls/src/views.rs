//! HTMLビュー
//!
//! askamaテンプレート（`templates/`）をコンパイル時に埋め込む。値はHTMLエスケープされる。

use askama::Template;
use vnetcalls_common::config::TestRequestSettings;

/// トップページ
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    vnet_endpoint: &'a str,
    non_vnet_endpoint: &'a str,
    version: &'a str,
}

/// エラーページ
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate<'a> {
    request_id: &'a str,
}

/// トップページを描画
pub fn render_index(settings: &TestRequestSettings) -> askama::Result<String> {
    IndexTemplate {
        vnet_endpoint: display_or_unset(&settings.vnet_endpoint),
        non_vnet_endpoint: display_or_unset(&settings.non_vnet_endpoint),
        version: env!("CARGO_PKG_VERSION"),
    }
    .render()
}

/// エラーページを描画
pub fn render_error(request_id: &str) -> askama::Result<String> {
    ErrorTemplate { request_id }.render()
}

fn display_or_unset(value: &str) -> &str {
    if value.trim().is_empty() {
        "(not configured)"
    } else {
        value
    }
}
