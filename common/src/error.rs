//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

/// vnetcalls error type
#[derive(Debug, Error)]
pub enum VnetError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(String),

    /// I/O error (bind, log directory, ...)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<config::ConfigError> for VnetError {
    fn from(err: config::ConfigError) -> Self {
        VnetError::Config(err.to_string())
    }
}

/// Result alias
pub type VnetResult<T> = Result<T, VnetError>;
