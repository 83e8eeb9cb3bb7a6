//! Adapter Layer
//!
//! 外部システム（BigQuery, Cloud Storage, 設定ファイル）との統合

pub mod auth;
pub mod bigquery;
pub mod config;
pub mod repositories;
pub mod storage;
