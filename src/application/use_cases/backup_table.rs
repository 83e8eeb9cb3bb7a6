//! # Backup Table Use Case
//!
//! テーブルをCSVとしてストレージへ退避するユースケース

use std::sync::Arc;
use anyhow::Result;
use chrono::{DateTime, Utc};
use log::info;

use crate::domain::entities::{StagedExport, StorageLocation, TableRef};
use crate::domain::repositories::WarehouseRepository;
use crate::domain::services::naming::NamingService;

/// テーブルバックアップユースケース
///
/// 抽出ジョブでテーブルを `gs://bucket/directory/{table}_{timestamp}_*.csv` に書き出す。
/// 抽出ジョブの完了は常に待つ
pub struct BackupTableUseCase<W: WarehouseRepository> {
    warehouse: Arc<W>,
}

impl<W: WarehouseRepository> BackupTableUseCase<W> {
    pub fn new(warehouse: Arc<W>) -> Self {
        Self { warehouse }
    }

    /// テーブルを現在時刻のファイル名でバックアップする
    ///
    /// # Returns
    ///
    /// 書き出されたファイル群の位置
    pub async fn execute(
        &self,
        table: &TableRef,
        location: &StorageLocation,
    ) -> Result<StagedExport> {
        self.execute_at(table, location, Utc::now()).await
    }

    /// 指定時刻のファイル名でバックアップする
    pub async fn execute_at(
        &self,
        table: &TableRef,
        location: &StorageLocation,
        now: DateTime<Utc>,
    ) -> Result<StagedExport> {
        let staged = StagedExport::new(
            location.clone(),
            NamingService::export_file_prefix(table.table(), now),
        );
        let uri = staged.destination_uri();

        let job = self.warehouse.extract_table(table, &uri).await?;
        self.warehouse.wait_for_job(&job).await?;

        info!("Exported {} to {}", table, uri);
        Ok(staged)
    }
}
