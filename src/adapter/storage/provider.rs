//! Object Store Providers
//!
//! `object_store` はバケット単位でストアを作るため、バケット名からストアを引く

use std::sync::Arc;

use anyhow::{Context, Result};
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::ObjectStore;

use crate::adapter::auth::gcp_auth::expand_key_path;

/// Resolves the store backing a bucket
pub trait ObjectStoreProvider: Send + Sync {
    fn store_for(&self, bucket: &str) -> Result<Arc<dyn ObjectStore>>;
}

/// Google Cloud Storage provider
///
/// Credentials come from the service account key when configured, otherwise from the
/// environment (`GOOGLE_SERVICE_ACCOUNT`, `GOOGLE_APPLICATION_CREDENTIALS`, metadata server).
pub struct GcsStoreProvider {
    service_account_key_path: Option<String>,
}

impl GcsStoreProvider {
    pub fn new(service_account_key_path: Option<String>) -> Self {
        Self {
            service_account_key_path,
        }
    }
}

impl ObjectStoreProvider for GcsStoreProvider {
    fn store_for(&self, bucket: &str) -> Result<Arc<dyn ObjectStore>> {
        let mut builder = GoogleCloudStorageBuilder::from_env().with_bucket_name(bucket);

        if let Some(ref key_path) = self.service_account_key_path {
            builder = builder.with_service_account_path(expand_key_path(key_path));
        }

        let store = builder
            .build()
            .with_context(|| format!("Failed to create GCS client for bucket {}", bucket))?;

        Ok(Arc::new(store))
    }
}

/// Provider returning the same store for every bucket (local or in-memory backends)
pub struct StaticStoreProvider {
    store: Arc<dyn ObjectStore>,
}

impl StaticStoreProvider {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }
}

impl ObjectStoreProvider for StaticStoreProvider {
    fn store_for(&self, _bucket: &str) -> Result<Arc<dyn ObjectStore>> {
        Ok(self.store.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_store::memory::InMemory;

    #[test]
    fn test_static_provider_shares_store() {
        let store: Arc<dyn ObjectStore> = Arc::new(InMemory::new());
        let provider = StaticStoreProvider::new(store.clone());

        let a = provider.store_for("bucket-a").unwrap();
        let b = provider.store_for("bucket-b").unwrap();

        assert!(Arc::ptr_eq(&a, &b));
    }
}
