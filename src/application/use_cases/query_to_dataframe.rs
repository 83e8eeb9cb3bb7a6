//! # Query To DataFrame Use Case
//!
//! クエリ結果をストレージ経由で DataFrame に読み込むユースケース

use std::sync::Arc;
use anyhow::{Context, Result};
use log::{info, warn};

use super::query_to_storage::QueryToStorageUseCase;
use super::storage_to_dataframe::StorageToDataFrameUseCase;
use crate::application::dto::ExportOptions;
use crate::domain::entities::{DataFrame, StorageLocation, TableRef};
use crate::domain::repositories::{ObjectStorageRepository, WarehouseRepository};

/// クエリ → DataFrame ユースケース
///
/// 行ストリーミングの代わりに、一時テーブル → CSV抽出 → ダウンロードで大きな結果を取得する
pub struct QueryToDataFrameUseCase<W: WarehouseRepository, S: ObjectStorageRepository> {
    export: QueryToStorageUseCase<W>,
    load: StorageToDataFrameUseCase<S>,
    storage: Arc<S>,
}

impl<W: WarehouseRepository, S: ObjectStorageRepository> QueryToDataFrameUseCase<W, S> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `warehouse` - ウェアハウスリポジトリ
    /// * `storage` - オブジェクトストレージリポジトリ
    pub fn new(warehouse: Arc<W>, storage: Arc<S>) -> Self {
        Self {
            export: QueryToStorageUseCase::new(warehouse),
            load: StorageToDataFrameUseCase::new(storage.clone()),
            storage,
        }
    }

    /// クエリ結果を DataFrame として取得する
    ///
    /// # Arguments
    ///
    /// * `query` - Standard SQL のクエリ
    /// * `staging` - 一時テーブル（処理後に削除される）
    /// * `location` - CSVの一時置き場
    /// * `options` - 一時テーブルのポリシー、ファイル削除の有無
    pub async fn execute(
        &self,
        query: &str,
        staging: &TableRef,
        location: &StorageLocation,
        options: &ExportOptions,
    ) -> Result<DataFrame> {
        let staged = self
            .export
            .execute(query, staging, location, options.if_exists)
            .await?;

        let (frame, files) = self
            .load
            .execute_with_files(&staged)
            .await
            .with_context(|| {
                format!("Staged files {} were left in place", staged.destination_uri())
            })?;

        if options.cleanup_files {
            for path in &files {
                if let Err(e) = self.storage.delete(location.bucket(), path).await {
                    warn!("Failed to delete gs://{}/{}: {}", location.bucket(), path, e);
                }
            }
            info!("Removed {} staged file(s)", files.len());
        }

        Ok(frame)
    }
}
