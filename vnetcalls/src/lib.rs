//! vnetcalls Server
//!
//! 制限付きネットワーク（VNet統合）内からの外向きHTTP疎通を確認するWebアプリ

#![warn(missing_docs)]

/// HTTPルーティング・ハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// 共有HTTPクライアント
pub mod http_client;

/// ロギング初期化ユーティリティ
pub mod logging;

/// エンドポイントプローブ
pub mod probe;

/// axumサーバー起動・シャットダウンハンドリング
pub mod server;

/// HTMLビュー
pub mod views;

use std::sync::Arc;
use vnetcalls_common::config::TestRequestSettings;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// プローブ（共有HTTPクライアントを保持）
    pub probe: probe::EndpointProbe,
    /// 疎通確認先（起動後は不変）
    pub test_request: Arc<TestRequestSettings>,
}

impl AppState {
    /// 共有クライアントと疎通確認先から状態を作成
    pub fn new(http_client: reqwest::Client, test_request: TestRequestSettings) -> Self {
        Self {
            probe: probe::EndpointProbe::new(http_client),
            test_request: Arc::new(test_request),
        }
    }
}
