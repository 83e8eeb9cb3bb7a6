//! # Storage To DataFrame Use Case
//!
//! ストレージ上のCSVをダウンロードして DataFrame に読み込むユースケース

use std::sync::Arc;
use anyhow::{Context, Result};
use log::info;

use crate::domain::entities::{DataFrame, StagedExport};
use crate::domain::error::HelperError;
use crate::domain::repositories::ObjectStorageRepository;
use crate::domain::services::csv_decoder::CsvDecoder;

/// ストレージ → DataFrame ユースケース
pub struct StorageToDataFrameUseCase<S: ObjectStorageRepository> {
    storage: Arc<S>,
}

impl<S: ObjectStorageRepository> StorageToDataFrameUseCase<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// エクスポートされた全シャードを1つの DataFrame に読み込む
    pub async fn execute(&self, staged: &StagedExport) -> Result<DataFrame> {
        let (frame, _files) = self.execute_with_files(staged).await?;
        Ok(frame)
    }

    /// DataFrame と、読み込んだオブジェクトパスを返す
    ///
    /// # Errors
    ///
    /// シャードが1つも見つからない場合 `HelperError::NoExportedFiles`
    pub async fn execute_with_files(
        &self,
        staged: &StagedExport,
    ) -> Result<(DataFrame, Vec<String>)> {
        let bucket = staged.location.bucket();
        let files = self
            .storage
            .list_files(&staged.location, &staged.file_prefix)
            .await?;

        if files.is_empty() {
            return Err(HelperError::NoExportedFiles {
                bucket: bucket.to_string(),
                prefix: staged.object_prefix(),
            }
            .into());
        }

        let frame = self.download_and_decode(bucket, &files).await?;
        Ok((frame, files))
    }

    /// 単一のCSVファイルを読み込む
    ///
    /// # Arguments
    ///
    /// * `bucket` - バケット名
    /// * `path` - ファイル名を含むパス（例: `downloads/some_file.csv`）
    pub async fn execute_path(&self, bucket: &str, path: &str) -> Result<DataFrame> {
        self.download_and_decode(bucket, &[path.to_string()]).await
    }

    async fn download_and_decode(&self, bucket: &str, files: &[String]) -> Result<DataFrame> {
        let mut shards = Vec::with_capacity(files.len());
        for path in files {
            let content = self.storage.download(bucket, path).await?;
            info!("Downloaded gs://{}/{} ({} bytes)", bucket, path, content.len());
            shards.push(content);
        }

        let frame = CsvDecoder::decode(&shards).context("Failed to decode exported CSV")?;
        info!(
            "Loaded {} rows x {} columns from {} file(s)",
            frame.num_rows(),
            frame.num_columns(),
            files.len()
        );

        Ok(frame)
    }
}
