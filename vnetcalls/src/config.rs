//! Configuration management via environment variables
//!
//! Settings file and `VNETCALLS__*` variables are handled by
//! [`vnetcalls_common::config::AppSettings`]. This module covers the
//! process-level knobs read before the settings are loaded (logging), with
//! fallback to deprecated variable names.

use std::path::PathBuf;

/// Get an environment variable with fallback to a deprecated name
///
/// If the new variable name is set, returns its value.
/// If only the old (deprecated) variable name is set, returns its value
/// and logs a deprecation warning.
///
/// # Example
/// ```
/// use vnetcalls::config::get_env_with_fallback;
///
/// let level = get_env_with_fallback("VNETCALLS_LOG_LEVEL", "LOG_LEVEL");
/// ```
pub fn get_env_with_fallback(new_name: &str, old_name: &str) -> Option<String> {
    if let Ok(val) = std::env::var(new_name) {
        return Some(val);
    }
    if let Ok(val) = std::env::var(old_name) {
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            old_name,
            new_name
        );
        return Some(val);
    }
    None
}

/// ログ設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// `EnvFilter`ディレクティブ（例: `info`, `vnetcalls=debug,tower_http=info`）
    pub level: String,
    /// JSONログのローテーション出力先（未設定なら標準出力のみ）
    pub dir: Option<PathBuf>,
}

impl LogSettings {
    /// 環境変数から読み込む
    ///
    /// `VNETCALLS_LOG_LEVEL`（旧: `LOG_LEVEL`）→ `RUST_LOG` → `info` の順。
    /// `VNETCALLS_LOG_DIR`（旧: `LOG_DIR`）が空でなければファイル出力を有効化する。
    pub fn from_env() -> Self {
        let level = get_env_with_fallback("VNETCALLS_LOG_LEVEL", "LOG_LEVEL")
            .or_else(|| std::env::var("RUST_LOG").ok())
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| "info".to_string());
        let dir = get_env_with_fallback("VNETCALLS_LOG_DIR", "LOG_DIR")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Self { level, dir }
    }
}
