//! # Clear Table Use Case
//!
//! テーブル削除、または全行削除ユースケース

use std::sync::Arc;
use anyhow::Result;
use log::info;

use crate::domain::entities::{IfExists, TableRef};
use crate::domain::repositories::WarehouseRepository;
use crate::domain::services::naming::NamingService;

/// テーブルクリアユースケース
///
/// テーブルそのものを削除するか、スキーマを残して全行を削除する
pub struct ClearTableUseCase<W: WarehouseRepository> {
    warehouse: Arc<W>,
}

impl<W: WarehouseRepository> ClearTableUseCase<W> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `warehouse` - ウェアハウスリポジトリ
    pub fn new(warehouse: Arc<W>) -> Self {
        Self { warehouse }
    }

    /// テーブルをクリアする
    ///
    /// # Arguments
    ///
    /// * `table` - 対象テーブル
    /// * `delete_rows` - `true` なら全行削除、`false` ならテーブル削除
    /// * `block` - 全行削除のDMLジョブ完了を待つかどうか
    ///
    /// # Errors
    ///
    /// テーブルが存在しない場合などサービス側のエラーをそのまま返す
    pub async fn execute(&self, table: &TableRef, delete_rows: bool, block: bool) -> Result<()> {
        if !delete_rows {
            self.warehouse.delete_table(table).await?;
            info!("Table {} deleted", table);
            return Ok(());
        }

        let dml = NamingService::delete_all_rows_sql(table);
        let job = self.warehouse.submit_query(&dml, None, IfExists::Fail).await?;
        if block {
            self.warehouse.wait_for_job(&job).await?;
        }
        info!("Rows from table {} deleted (job {})", table, job.job_id);

        Ok(())
    }
}
