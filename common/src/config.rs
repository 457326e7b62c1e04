//! 設定管理
//!
//! AppSettings, TestRequestSettings等の設定構造体と読み込み処理
//!
//! 読み込み順（後勝ち）:
//! 1. 構造体のデフォルト値
//! 2. 設定ファイル（TOML/JSON/YAML、拡張子で判別）
//! 3. 環境変数 `VNETCALLS__<SECTION>__<KEY>`

use crate::error::VnetResult;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 環境変数のプレフィックス
pub const ENV_PREFIX: &str = "VNETCALLS";

/// 設定ファイル未指定時に探すパス（拡張子なし）
pub const DEFAULT_CONFIG_BASENAME: &str = "config/vnetcalls";

/// アプリケーション設定
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    /// サーバー設定
    #[serde(default)]
    pub server: ServerSettings,

    /// 疎通確認先の設定
    #[serde(default)]
    pub test_request: TestRequestSettings,

    /// 外向きHTTPクライアント設定
    #[serde(default)]
    pub http_client: HttpClientSettings,
}

/// サーバー設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerSettings {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 8080)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    /// バインドアドレス（`host:port`）
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 疎通確認先の設定
///
/// URLの検証は行わない。未設定・不正なURLはリクエスト時のエラー文字列として返る。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestRequestSettings {
    /// VNet経由で到達するエンドポイント（プライマリ）
    #[serde(default, alias = "primary_endpoint")]
    pub vnet_endpoint: String,

    /// VNetを経由しないエンドポイント（セカンダリ）
    #[serde(default, alias = "secondary_endpoint")]
    pub non_vnet_endpoint: String,
}

/// 外向きHTTPクライアント設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HttpClientSettings {
    /// リクエスト全体のタイムアウト（秒）(デフォルト: 100、0で無効)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agentヘッダー (デフォルト: "vnetcalls/<version>")
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    100
}

fn default_user_agent() -> String {
    format!("vnetcalls/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for HttpClientSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl AppSettings {
    /// 設定を読み込む
    ///
    /// `path` を指定した場合、そのファイルは必須。未指定の場合は
    /// [`DEFAULT_CONFIG_BASENAME`] を任意で読み込む。
    pub fn load(path: Option<&Path>) -> VnetResult<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_BASENAME).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}
