//! # Object Storage Repository Trait
//!
//! バックアップ・エクスポートファイルの取得と削除を抽象化

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::entities::StorageLocation;

/// オブジェクトストレージリポジトリ
#[async_trait]
pub trait ObjectStorageRepository: Send + Sync {
    /// ディレクトリ内で `file_prefix` から始まるファイルを一覧する
    ///
    /// # Returns
    ///
    /// バケット内のオブジェクトパス（名前順）
    async fn list_files(
        &self,
        location: &StorageLocation,
        file_prefix: &str,
    ) -> Result<Vec<String>>;

    /// オブジェクトをダウンロードする
    async fn download(&self, bucket: &str, path: &str) -> Result<Bytes>;

    /// オブジェクトを削除する
    async fn delete(&self, bucket: &str, path: &str) -> Result<()>;
}
