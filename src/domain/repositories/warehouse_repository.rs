//! # Warehouse Repository Trait
//!
//! データウェアハウスへのジョブ投入・テーブル操作を抽象化

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::{IfExists, JobHandle, TableRef};

/// ウェアハウスリポジトリ
///
/// クエリジョブ・抽出ジョブの投入と、テーブル／ビューの管理を担当する
#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    /// テーブル（またはビュー）が存在するか確認する
    async fn table_exists(&self, table: &TableRef) -> Result<bool>;

    /// クエリジョブを投入する
    ///
    /// # Arguments
    ///
    /// * `query` - Standard SQL のクエリ
    /// * `destination` - 結果の書き込み先（DMLなどでは `None`）
    /// * `if_exists` - 書き込み先が存在する場合のポリシー
    ///
    /// # Returns
    ///
    /// 投入されたジョブのハンドル（完了は待たない）
    async fn submit_query(
        &self,
        query: &str,
        destination: Option<&TableRef>,
        if_exists: IfExists,
    ) -> Result<JobHandle>;

    /// テーブルをヘッダ付きCSVとしてストレージへ抽出するジョブを投入する
    async fn extract_table(&self, table: &TableRef, destination_uri: &str) -> Result<JobHandle>;

    /// ジョブの完了を待つ
    ///
    /// # Errors
    ///
    /// ジョブがエラー結果で完了した場合 `HelperError::JobFailed`
    async fn wait_for_job(&self, job: &JobHandle) -> Result<()>;

    /// テーブル（またはビュー）を削除する
    async fn delete_table(&self, table: &TableRef) -> Result<()>;

    /// Standard SQL のビューを作成する
    async fn create_view(&self, view: &TableRef, view_sql: &str) -> Result<()>;
}
