//! BigQuery Client Abstractions
//!
//! クライアントの抽象化と実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use google_cloud_bigquery::client::Client;
use google_cloud_bigquery::http::job::get::GetJobRequest;
use google_cloud_bigquery::http::job::Job;

#[cfg(test)]
use mockall::automock;

use super::errors::{error_chain_to_string, is_not_found_error};

/// Trait for the BigQuery REST calls this crate makes
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BigQueryApi: Send + Sync {
    /// jobs.insert
    async fn create_job(&self, job: &Job) -> Result<Job>;

    /// jobs.get
    async fn get_job(
        &self,
        project_id: &str,
        job_id: &str,
        location: Option<String>,
    ) -> Result<Job>;

    /// tables.get, with 404 mapped to `false`
    async fn table_exists(&self, project_id: &str, dataset: &str, table: &str) -> Result<bool>;

    /// tables.delete
    async fn delete_table(&self, project_id: &str, dataset: &str, table: &str) -> Result<()>;
}

/// BigQuery client that owns the Client instance
pub struct OwnedBigQueryClient {
    client: Client,
}

impl OwnedBigQueryClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl BigQueryApi for OwnedBigQueryClient {
    async fn create_job(&self, job: &Job) -> Result<Job> {
        self.client
            .job()
            .create(job)
            .await
            .context("BigQuery job insert failed")
    }

    async fn get_job(
        &self,
        project_id: &str,
        job_id: &str,
        location: Option<String>,
    ) -> Result<Job> {
        let request = GetJobRequest { location };
        self.client
            .job()
            .get(project_id, job_id, &request)
            .await
            .context("BigQuery job status request failed")
    }

    async fn table_exists(&self, project_id: &str, dataset: &str, table: &str) -> Result<bool> {
        match self.client.table().get(project_id, dataset, table).await {
            Ok(_) => Ok(true),
            Err(e) => {
                let e = anyhow::Error::from(e);
                if is_not_found_error(&error_chain_to_string(&e)) {
                    Ok(false)
                } else {
                    Err(e).context("BigQuery table lookup failed")
                }
            }
        }
    }

    async fn delete_table(&self, project_id: &str, dataset: &str, table: &str) -> Result<()> {
        self.client
            .table()
            .delete(project_id, dataset, table)
            .await
            .context("BigQuery table delete failed")
    }
}
