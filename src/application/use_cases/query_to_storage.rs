//! # Query To Storage Use Case
//!
//! クエリ結果を一時テーブル経由でストレージへエクスポートするユースケース

use std::sync::Arc;
use anyhow::{Context, Result};
use log::info;

use super::backup_table::BackupTableUseCase;
use crate::domain::entities::{IfExists, StagedExport, StorageLocation, TableRef};
use crate::domain::repositories::WarehouseRepository;

/// クエリ → ストレージユースケース
///
/// 一時テーブルへ書き込み → CSVへ抽出 → 一時テーブル削除。
/// 抽出には完了済みのテーブルが必要なため、クエリジョブの完了は常に待つ
pub struct QueryToStorageUseCase<W: WarehouseRepository> {
    warehouse: Arc<W>,
    backup: BackupTableUseCase<W>,
}

impl<W: WarehouseRepository> QueryToStorageUseCase<W> {
    pub fn new(warehouse: Arc<W>) -> Self {
        Self {
            backup: BackupTableUseCase::new(warehouse.clone()),
            warehouse,
        }
    }

    /// クエリ結果をエクスポートする
    ///
    /// # Arguments
    ///
    /// * `query` - Standard SQL のクエリ
    /// * `staging` - 一時テーブル
    /// * `location` - 書き出し先
    /// * `if_exists` - 一時テーブルが存在する場合のポリシー
    ///
    /// # Returns
    ///
    /// 書き出されたファイル群の位置
    pub async fn execute(
        &self,
        query: &str,
        staging: &TableRef,
        location: &StorageLocation,
        if_exists: IfExists,
    ) -> Result<StagedExport> {
        let job = self
            .warehouse
            .submit_query(query, Some(staging), if_exists)
            .await?;
        self.warehouse.wait_for_job(&job).await?;
        info!("Query results staged in {}", staging);

        let staged = self
            .backup
            .execute(staging, location)
            .await
            .with_context(|| format!("Staging table {} was left in place", staging))?;

        self.warehouse.delete_table(staging).await?;
        info!("Staging table {} deleted", staging);

        Ok(staged)
    }
}
