//! vnetcalls 共通ライブラリ
//!
//! 設定型と共通エラー型

#![warn(missing_docs)]

/// 設定管理
pub mod config;

/// エラー型定義
pub mod error;
