//! ユースケーステスト用のインメモリ実装
//!
//! 呼び出し順を記録し、呼び出し列をアサートできるようにする

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::entities::{IfExists, JobHandle, StorageLocation, TableRef};
use crate::domain::error::HelperError;
use crate::domain::repositories::{ObjectStorageRepository, WarehouseRepository};

pub struct RecordingStorage {
    objects: Mutex<BTreeMap<(String, String), Bytes>>,
    calls: Mutex<Vec<String>>,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self {
            objects: Mutex::new(BTreeMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn put(&self, bucket: &str, path: &str, content: &str) {
        self.objects.lock().unwrap().insert(
            (bucket.to_string(), path.to_string()),
            Bytes::from(content.to_string()),
        );
    }

    pub fn paths(&self, bucket: &str) -> Vec<String> {
        self.objects
            .lock()
            .unwrap()
            .keys()
            .filter(|(b, _)| b == bucket)
            .map(|(_, p)| p.clone())
            .collect()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ObjectStorageRepository for RecordingStorage {
    async fn list_files(
        &self,
        location: &StorageLocation,
        file_prefix: &str,
    ) -> Result<Vec<String>> {
        let prefix = location.object_path(file_prefix);
        self.record(format!("list {}", prefix));
        Ok(self
            .paths(location.bucket())
            .into_iter()
            .filter(|p| p.starts_with(&prefix))
            .collect())
    }

    async fn download(&self, bucket: &str, path: &str) -> Result<Bytes> {
        self.record(format!("download {}", path));
        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), path.to_string()))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("object not found: {}", path))
    }

    async fn delete(&self, bucket: &str, path: &str) -> Result<()> {
        self.record(format!("delete {}", path));
        self.objects
            .lock()
            .unwrap()
            .remove(&(bucket.to_string(), path.to_string()));
        Ok(())
    }
}

/// 呼び出しを記録するウェアハウス
///
/// 抽出ジョブは `storage` が設定されていれば `extract_shards` をCSVシャードとして書き込む
pub struct RecordingWarehouse {
    existing: Mutex<HashSet<String>>,
    calls: Mutex<Vec<String>>,
    next_job: AtomicUsize,
    failing_job: Option<String>,
    storage: Option<Arc<RecordingStorage>>,
    extract_shards: Vec<String>,
}

impl RecordingWarehouse {
    pub fn new() -> Self {
        Self {
            existing: Mutex::new(HashSet::new()),
            calls: Mutex::new(Vec::new()),
            next_job: AtomicUsize::new(1),
            failing_job: None,
            storage: None,
            extract_shards: Vec::new(),
        }
    }

    pub fn with_table(self, table: &TableRef) -> Self {
        self.existing.lock().unwrap().insert(table.to_string());
        self
    }

    pub fn with_failing_job(mut self, job_id: &str) -> Self {
        self.failing_job = Some(job_id.to_string());
        self
    }

    pub fn with_extract_target(mut self, storage: Arc<RecordingStorage>, shards: &[&str]) -> Self {
        self.storage = Some(storage);
        self.extract_shards = shards.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// `exists` 以外の呼び出しの先頭語だけを並べる
    pub fn call_kinds(&self) -> Vec<String> {
        self.calls()
            .iter()
            .filter_map(|c| c.split_whitespace().next().map(str::to_string))
            .filter(|k| k != "exists")
            .collect()
    }

    pub fn exists(&self, table: &TableRef) -> bool {
        self.existing.lock().unwrap().contains(&table.to_string())
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_handle(&self, table: &TableRef) -> JobHandle {
        let n = self.next_job.fetch_add(1, Ordering::SeqCst);
        JobHandle::new(table.project_id(), format!("job-{}", n), Some("US".to_string()))
    }
}

#[async_trait]
impl WarehouseRepository for RecordingWarehouse {
    async fn table_exists(&self, table: &TableRef) -> Result<bool> {
        self.record(format!("exists {}", table));
        Ok(self.exists(table))
    }

    async fn submit_query(
        &self,
        query: &str,
        destination: Option<&TableRef>,
        if_exists: IfExists,
    ) -> Result<JobHandle> {
        match destination {
            Some(dest) => {
                self.record(format!("submit {} {} {}", dest, if_exists, query));
                self.existing.lock().unwrap().insert(dest.to_string());
                Ok(self.next_handle(dest))
            }
            None => {
                self.record(format!("submit - {} {}", if_exists, query));
                let n = self.next_job.fetch_add(1, Ordering::SeqCst);
                Ok(JobHandle::new("proj", format!("job-{}", n), None))
            }
        }
    }

    async fn extract_table(&self, table: &TableRef, destination_uri: &str) -> Result<JobHandle> {
        self.record(format!("extract {} {}", table, destination_uri));

        if let Some(storage) = &self.storage {
            let rest = destination_uri.trim_start_matches("gs://");
            let (bucket, pattern) = rest.split_once('/').unwrap_or((rest, ""));
            for (i, shard) in self.extract_shards.iter().enumerate() {
                let path = pattern.replace('*', &format!("{:012}", i));
                storage.put(bucket, &path, shard);
            }
        }

        Ok(self.next_handle(table))
    }

    async fn wait_for_job(&self, job: &JobHandle) -> Result<()> {
        self.record(format!("wait {}", job.job_id));
        if self.failing_job.as_deref() == Some(job.job_id.as_str()) {
            return Err(HelperError::JobFailed {
                job_id: job.job_id.clone(),
                reason: "invalidQuery".to_string(),
            }
            .into());
        }
        Ok(())
    }

    async fn delete_table(&self, table: &TableRef) -> Result<()> {
        self.record(format!("delete {}", table));
        if !self.existing.lock().unwrap().remove(&table.to_string()) {
            anyhow::bail!("Not found: Table {}", table);
        }
        Ok(())
    }

    async fn create_view(&self, view: &TableRef, view_sql: &str) -> Result<()> {
        self.record(format!("create_view {} {}", view, view_sql));
        self.existing.lock().unwrap().insert(view.to_string());
        Ok(())
    }
}
