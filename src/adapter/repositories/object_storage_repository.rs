//! Object Storage Repository Implementation
//!
//! ObjectStorageRepositoryの object_store 実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use futures::TryStreamExt;
use log::info;
use object_store::path::Path;
use object_store::ObjectMeta;
use std::sync::Arc;

use crate::adapter::storage::provider::ObjectStoreProvider;
use crate::domain::entities::StorageLocation;
use crate::domain::repositories::ObjectStorageRepository;

/// object_store ベースのストレージリポジトリ
pub struct ObjectStoreStorageRepository {
    provider: Arc<dyn ObjectStoreProvider>,
}

impl ObjectStoreStorageRepository {
    /// 新しいリポジトリを作成
    pub fn new(provider: Arc<dyn ObjectStoreProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ObjectStorageRepository for ObjectStoreStorageRepository {
    async fn list_files(
        &self,
        location: &StorageLocation,
        file_prefix: &str,
    ) -> Result<Vec<String>> {
        let store = self.provider.store_for(location.bucket())?;
        let directory = Path::from(location.directory());

        let objects = store
            .list(Some(&directory))
            .try_collect::<Vec<ObjectMeta>>()
            .await
            .with_context(|| {
                format!("Failed to list gs://{}/{}", location.bucket(), location.directory())
            })?;

        let prefix = location.object_path(file_prefix);
        let mut files: Vec<String> = objects
            .into_iter()
            .map(|meta| meta.location.to_string())
            .filter(|path| path.starts_with(&prefix))
            .collect();
        files.sort();

        info!(
            "Found {} file(s) matching gs://{}/{}*",
            files.len(),
            location.bucket(),
            prefix
        );
        Ok(files)
    }

    async fn download(&self, bucket: &str, path: &str) -> Result<Bytes> {
        let store = self.provider.store_for(bucket)?;
        let content = store
            .get(&Path::from(path))
            .await
            .with_context(|| format!("Failed to download gs://{}/{}", bucket, path))?
            .bytes()
            .await
            .with_context(|| format!("Failed to read gs://{}/{}", bucket, path))?;
        Ok(content)
    }

    async fn delete(&self, bucket: &str, path: &str) -> Result<()> {
        let store = self.provider.store_for(bucket)?;
        store
            .delete(&Path::from(path))
            .await
            .with_context(|| format!("Failed to delete gs://{}/{}", bucket, path))?;
        Ok(())
    }
}
