//! ロギング初期化ユーティリティ
//!
//! 標準出力へのfmtレイヤーと、任意でJSON形式の日次ローテーションファイル出力を構成する。

use crate::config::LogSettings;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vnetcalls_common::error::{VnetError, VnetResult};

/// ログファイル名のプレフィックス（`vnetcalls.log.YYYY-MM-DD`）
const LOG_FILE_PREFIX: &str = "vnetcalls.log";

/// 不正なフィルタ指定時に使うレベル
const FALLBACK_FILTER: &str = "info";

/// グローバルsubscriberを初期化する
///
/// ファイル出力を有効にした場合は[`WorkerGuard`]を返す。破棄するとバッファが
/// フラッシュされなくなるため、`main`で保持し続けること。
pub fn init(settings: &LogSettings) -> VnetResult<Option<WorkerGuard>> {
    let filter = build_filter(&settings.level);

    let (file_layer, guard) = match &settings.dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(file_layer)
        .try_init()
        .map_err(|e| VnetError::Internal(format!("failed to initialize logging: {}", e)))?;

    Ok(guard)
}

fn build_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}
