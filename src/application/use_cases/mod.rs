//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ClearTableUseCase**: テーブル削除／全行削除
//! - **BackupTableUseCase**: テーブルをストレージへCSVで退避
//! - **QueryToTableUseCase**: クエリ結果をテーブルへ書き込み（置き換え時はバックアップ）
//! - **CreateViewUseCase**: ビューの作成・更新
//! - **QueryToStorageUseCase**: クエリ結果をストレージへエクスポート
//! - **StorageToDataFrameUseCase**: ストレージ上のCSVを DataFrame へ読み込み
//! - **QueryToDataFrameUseCase**: クエリ → ストレージ → DataFrame

pub mod backup_table;
pub mod clear_table;
pub mod create_view;
pub mod query_to_dataframe;
pub mod query_to_storage;
pub mod query_to_table;
pub mod storage_to_dataframe;

#[cfg(test)]
pub(crate) mod test_support;
