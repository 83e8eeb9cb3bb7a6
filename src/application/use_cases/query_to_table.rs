//! # Query To Table Use Case
//!
//! クエリ結果をテーブルへ書き込むユースケース

use std::sync::Arc;
use anyhow::Result;
use log::info;

use super::backup_table::BackupTableUseCase;
use crate::application::dto::QueryOptions;
use crate::domain::entities::{IfExists, JobHandle, StagedExport, TableRef};
use crate::domain::repositories::WarehouseRepository;

/// クエリ書き込みの結果
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    /// 投入されたクエリジョブ
    pub job: JobHandle,
    /// 置き換え前に取ったバックアップ
    pub backup: Option<StagedExport>,
}

/// クエリ → テーブルユースケース
///
/// `IfExists::Replace` かつバックアップ先が指定され、出力先が既に存在する場合は
/// バックアップ → 削除 → 再作成の順に処理する
pub struct QueryToTableUseCase<W: WarehouseRepository> {
    warehouse: Arc<W>,
    backup: BackupTableUseCase<W>,
}

impl<W: WarehouseRepository> QueryToTableUseCase<W> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `warehouse` - ウェアハウスリポジトリ
    pub fn new(warehouse: Arc<W>) -> Self {
        Self {
            backup: BackupTableUseCase::new(warehouse.clone()),
            warehouse,
        }
    }

    /// クエリを実行して結果を書き込む
    ///
    /// # Arguments
    ///
    /// * `query` - Standard SQL のクエリ
    /// * `destination` - 出力先テーブル
    /// * `options` - 書き込みポリシー、待機、バックアップ先
    ///
    /// # Errors
    ///
    /// バックアップ、削除、ジョブ投入のいずれかに失敗した場合。
    /// バックアップに失敗した場合は出力先を削除しない
    pub async fn execute(
        &self,
        query: &str,
        destination: &TableRef,
        options: &QueryOptions,
    ) -> Result<QueryOutcome> {
        let mut backup = None;

        if let (IfExists::Replace, Some(location)) = (options.if_exists, options.backup.as_ref()) {
            if self.warehouse.table_exists(destination).await? {
                let staged = self.backup.execute(destination, location).await?;
                self.warehouse.delete_table(destination).await?;
                info!(
                    "Backed up and deleted {} before replacing it",
                    destination
                );
                backup = Some(staged);
            }
        }

        let job = self
            .warehouse
            .submit_query(query, Some(destination), options.if_exists)
            .await?;

        if options.block {
            self.warehouse.wait_for_job(&job).await?;
            info!("Query results loaded to table {}", destination);
        } else {
            info!("Query job {} submitted for table {}", job.job_id, destination);
        }

        Ok(QueryOutcome { job, backup })
    }
}
