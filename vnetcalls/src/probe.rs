//! エンドポイントプローブ
//!
//! 設定済みURLへGETを1回だけ発行し、レスポンスボディ（またはエラー文字列）を返す。
//!
//! - ステータスコードは検査しない（4xx/5xxでもボディをそのまま返す）
//! - リトライしない
//! - ログ出力は呼び出し側（ハンドラー）の責務

use reqwest::Client;
use std::error::Error as StdError;
use std::fmt::Write as _;
use thiserror::Error;

/// プローブ失敗
#[derive(Debug, Error)]
pub enum ProbeError {
    /// リクエストの組み立て・送信に失敗（URL不正、DNS、接続拒否、TLS、タイムアウト等）
    #[error("GET {url} failed")]
    Send {
        /// 対象URL
        url: String,
        /// 元のエラー
        #[source]
        source: reqwest::Error,
    },

    /// レスポンスボディの読み込みに失敗
    #[error("reading response body from {url} failed")]
    Body {
        /// 対象URL
        url: String,
        /// 元のエラー
        #[source]
        source: reqwest::Error,
    },
}

impl ProbeError {
    /// タイムアウトによる失敗か
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Send { source, .. } | Self::Body { source, .. } => source.is_timeout(),
        }
    }
}

/// 外向きGETで疎通確認を行うプローブ
///
/// 内部の`reqwest::Client`はプロセス共有（クローンは参照カウントのみ）。
#[derive(Debug, Clone)]
pub struct EndpointProbe {
    client: Client,
}

impl EndpointProbe {
    /// 共有HTTPクライアントからプローブを作成
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// `url`へGETを発行し、ボディ全体をテキストとして返す
    pub async fn probe(&self, url: &str) -> Result<String, ProbeError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ProbeError::Send {
                url: url.to_string(),
                source,
            })?;

        response.text().await.map_err(|source| ProbeError::Body {
            url: url.to_string(),
            source,
        })
    }
}

/// エラーとその`source()`チェーン全体を人間が読める文字列にする
///
/// 失敗を表示する境界（ハンドラー）でのみ使う。戻り値は常に非空。
pub fn describe_error(err: &(dyn StdError + 'static)) -> String {
    let mut text = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        // reqwestは下位エラーをDisplayに含めるため、重複行は出さない
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            let _ = write!(text, "\n  caused by: {}", cause_text);
        }
        current = cause.source();
    }
    if text.trim().is_empty() {
        text = format!("{:?}", err);
    }
    text
}
