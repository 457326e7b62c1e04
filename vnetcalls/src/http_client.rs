//! 共有HTTPクライアント
//!
//! プロセス起動時に1つだけ生成し、`AppState`経由で全ハンドラーが共有する
//! （接続プーリングはreqwestのデフォルト動作に任せる）。

use reqwest::Client;
use std::time::Duration;
use vnetcalls_common::config::HttpClientSettings;
use vnetcalls_common::error::{VnetError, VnetResult};

/// 設定からHTTPクライアントを作成
///
/// `timeout_secs == 0` の場合はタイムアウトを設定しない。
pub fn build_client(settings: &HttpClientSettings) -> VnetResult<Client> {
    let mut builder = Client::builder().user_agent(settings.user_agent.clone());
    if settings.timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(settings.timeout_secs));
    }
    builder
        .build()
        .map_err(|e| VnetError::Http(format!("failed to create HTTP client: {}", e)))
}
