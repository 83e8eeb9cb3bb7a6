//! # Job Handles
//!
//! 投入済みジョブとエクスポート結果

use super::storage_location::StorageLocation;

/// 投入済みジョブへのハンドル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle {
    pub project_id: String,
    pub job_id: String,
    pub location: Option<String>,
}

impl JobHandle {
    pub fn new(
        project_id: impl Into<String>,
        job_id: impl Into<String>,
        location: Option<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            job_id: job_id.into(),
            location,
        }
    }
}

/// 1回の抽出ジョブで書き出されたファイル群
///
/// オブジェクト名は `{directory}/{file_prefix}*.csv`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedExport {
    pub location: StorageLocation,
    pub file_prefix: String,
}

impl StagedExport {
    pub fn new(location: StorageLocation, file_prefix: impl Into<String>) -> Self {
        Self {
            location,
            file_prefix: file_prefix.into(),
        }
    }

    /// 抽出ジョブに渡すワイルドカードURI
    pub fn destination_uri(&self) -> String {
        self.location.gs_uri(&format!("{}*.csv", self.file_prefix))
    }

    /// 一覧取得用のオブジェクトパス前方一致キー
    pub fn object_prefix(&self) -> String {
        self.location.object_path(&self.file_prefix)
    }
}
