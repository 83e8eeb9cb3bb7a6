//! BigQuery Warehouse Repository Implementation
//!
//! WarehouseRepositoryのBigQuery実装

use anyhow::Result;
use async_trait::async_trait;
use google_cloud_bigquery::http::job::Job;
use log::{debug, info};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::adapter::bigquery::client::BigQueryApi;
use crate::adapter::bigquery::errors::{
    error_chain_to_string, is_already_exists_error, poll_interval_ms,
};
use crate::adapter::bigquery::jobs::{
    build_extract_job, build_query_job, create_view_ddl, job_progress, new_job_id, JobProgress,
};
use crate::adapter::config::Config;
use crate::domain::entities::{IfExists, JobHandle, TableRef};
use crate::domain::error::HelperError;
use crate::domain::repositories::WarehouseRepository;

/// BigQueryウェアハウスリポジトリ
///
/// ジョブは設定のプロジェクトとロケーションで実行する
pub struct BigQueryWarehouseRepository {
    api: Arc<dyn BigQueryApi>,
    project_id: String,
    location: String,
    poll_interval: Duration,
}

impl BigQueryWarehouseRepository {
    /// 新しいリポジトリを作成
    pub fn new(api: Arc<dyn BigQueryApi>, config: &Config) -> Self {
        Self {
            api,
            project_id: config.project_id.clone(),
            location: config.location.clone(),
            poll_interval: Duration::from_millis(poll_interval_ms(config.poll_interval_ms)),
        }
    }

    /// ジョブ状態の確認間隔を上書きする
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    fn handle_for(&self, job: &Job, requested_id: String) -> JobHandle {
        let reference = &job.job_reference;
        let job_id = if reference.job_id.is_empty() {
            requested_id
        } else {
            reference.job_id.clone()
        };
        let location = reference
            .location
            .clone()
            .or_else(|| Some(self.location.clone()));
        JobHandle::new(self.project_id.clone(), job_id, location)
    }
}

#[async_trait]
impl WarehouseRepository for BigQueryWarehouseRepository {
    async fn table_exists(&self, table: &TableRef) -> Result<bool> {
        self.api
            .table_exists(table.project_id(), table.dataset(), table.table())
            .await
    }

    async fn submit_query(
        &self,
        query: &str,
        destination: Option<&TableRef>,
        if_exists: IfExists,
    ) -> Result<JobHandle> {
        let job_id = new_job_id();
        let job = build_query_job(
            &self.project_id,
            &self.location,
            job_id.clone(),
            query,
            destination,
            if_exists,
        );

        let created = self.api.create_job(&job).await?;
        let handle = self.handle_for(&created, job_id);

        match destination {
            Some(dest) => info!(
                "Submitted query job {} -> {} ({})",
                handle.job_id, dest, if_exists
            ),
            None => info!("Submitted query job {}", handle.job_id),
        }
        Ok(handle)
    }

    async fn extract_table(&self, table: &TableRef, destination_uri: &str) -> Result<JobHandle> {
        let job_id = new_job_id();
        let job = build_extract_job(
            &self.project_id,
            &self.location,
            job_id.clone(),
            table,
            destination_uri,
        );

        let created = self.api.create_job(&job).await?;
        let handle = self.handle_for(&created, job_id);

        info!(
            "Submitted extract job {}: {} -> {}",
            handle.job_id, table, destination_uri
        );
        Ok(handle)
    }

    async fn wait_for_job(&self, job: &JobHandle) -> Result<()> {
        loop {
            let status = self
                .api
                .get_job(&job.project_id, &job.job_id, job.location.clone())
                .await?;

            match job_progress(&status) {
                JobProgress::Done => {
                    debug!("Job {} done", job.job_id);
                    return Ok(());
                }
                JobProgress::Failed(reason) => {
                    return Err(HelperError::JobFailed {
                        job_id: job.job_id.clone(),
                        reason,
                    }
                    .into());
                }
                JobProgress::Running => sleep(self.poll_interval).await,
            }
        }
    }

    async fn delete_table(&self, table: &TableRef) -> Result<()> {
        self.api
            .delete_table(table.project_id(), table.dataset(), table.table())
            .await?;
        info!("Deleted {}", table);
        Ok(())
    }

    async fn create_view(&self, view: &TableRef, view_sql: &str) -> Result<()> {
        let ddl = create_view_ddl(view, view_sql);
        let job = self.submit_query(&ddl, None, IfExists::Fail).await?;

        match self.wait_for_job(&job).await {
            Ok(()) => Ok(()),
            Err(e) if is_already_exists_error(&error_chain_to_string(&e)) => {
                Err(HelperError::ViewAlreadyExists(view.to_string()).into())
            }
            Err(e) => Err(e),
        }
    }
}
