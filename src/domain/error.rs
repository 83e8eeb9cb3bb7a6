//! # Domain Errors
//!
//! ローカルで検出されるエラー。外部サービス由来のエラーは変換せずに伝播する。

use thiserror::Error;

/// ヘルパー固有のエラー
///
/// `anyhow::Error` に包まれて返されるため、呼び出し側は `downcast_ref` で判別できる
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HelperError {
    /// 空の識別子（プロジェクト、データセット、テーブル、バケット）
    #[error("{0} must not be empty")]
    EmptyIdentifier(&'static str),

    /// 空のストレージディレクトリ
    #[error("storage directory must not be empty")]
    EmptyDirectory,

    /// 不正な if_exists ポリシー
    #[error("invalid if_exists policy '{0}' (expected fail, replace or append)")]
    InvalidIfExists(String),

    /// ジョブがエラー結果で完了した
    #[error("job {job_id} failed: {reason}")]
    JobFailed { job_id: String, reason: String },

    /// エクスポート先にファイルが見つからない
    #[error("no exported files found under gs://{bucket}/{prefix}")]
    NoExportedFiles { bucket: String, prefix: String },

    /// ビューが既に存在し、更新が指定されていない
    #[error("view {0} already exists (use update to replace it)")]
    ViewAlreadyExists(String),
}
