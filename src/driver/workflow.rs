//! Workflow Orchestration
//!
//! サブコマンドのオーケストレーション

use anyhow::{Context, Result};
use log::info;

use std::sync::Arc;

use crate::adapter::auth::create_bigquery_client;
use crate::adapter::bigquery::client::OwnedBigQueryClient;
use crate::adapter::config::Config;
use crate::adapter::repositories::bigquery_warehouse_repository::BigQueryWarehouseRepository;
use crate::adapter::repositories::object_storage_repository::ObjectStoreStorageRepository;
use crate::adapter::storage::provider::GcsStoreProvider;
use crate::application::dto::{ExportOptions, QueryOptions};
use crate::application::use_cases::backup_table::BackupTableUseCase;
use crate::application::use_cases::clear_table::ClearTableUseCase;
use crate::application::use_cases::create_view::CreateViewUseCase;
use crate::application::use_cases::query_to_dataframe::QueryToDataFrameUseCase;
use crate::application::use_cases::query_to_storage::QueryToStorageUseCase;
use crate::application::use_cases::query_to_table::QueryToTableUseCase;
use crate::application::use_cases::storage_to_dataframe::StorageToDataFrameUseCase;
use crate::domain::entities::{DataFrame, StorageLocation, TableRef};
use crate::domain::repositories::{ObjectStorageRepository, WarehouseRepository};
use crate::domain::services::naming::NamingService;

use super::cli::{Command, StorageArgs, TargetArgs};

/// Resolve a table name against the project/dataset overrides and the config
pub fn resolve_table(config: &Config, target: &TargetArgs, table: &str) -> Result<TableRef> {
    let project = target.project.as_deref().unwrap_or(&config.project_id);
    let dataset = target.dataset.as_deref().unwrap_or(&config.dataset);
    Ok(TableRef::new(project, dataset, table)?)
}

/// Staging table name: the one given, or a generated temporary name
pub fn staging_table_name(table: Option<&str>) -> String {
    match table {
        Some(name) => name.to_string(),
        None => NamingService::temp_table_name(&uuid::Uuid::new_v4().to_string()),
    }
}

/// Workflow wiring repositories into use cases
pub struct HelperWorkflow<W: WarehouseRepository, S: ObjectStorageRepository> {
    config: Config,
    warehouse: Arc<W>,
    storage: Arc<S>,
}

impl HelperWorkflow<BigQueryWarehouseRepository, ObjectStoreStorageRepository> {
    /// Authenticate and build the BigQuery / GCS repositories
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub async fn connect(config: Config) -> Result<Self> {
        let client = create_bigquery_client(config.service_account_key_path.as_deref()).await?;
        println!("✓ Created BigQuery client");

        let warehouse = Arc::new(BigQueryWarehouseRepository::new(
            Arc::new(OwnedBigQueryClient::new(client)),
            &config,
        ));
        let storage = Arc::new(ObjectStoreStorageRepository::new(Arc::new(
            GcsStoreProvider::new(config.service_account_key_path.clone()),
        )));

        Ok(Self::new(config, warehouse, storage))
    }
}

impl<W: WarehouseRepository, S: ObjectStorageRepository> HelperWorkflow<W, S> {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config, warehouse: Arc<W>, storage: Arc<S>) -> Self {
        Self {
            config,
            warehouse,
            storage,
        }
    }

    /// Execute one subcommand
    pub async fn execute(&self, command: Command) -> Result<()> {
        info!("Project: {} / Dataset: {}", self.config.project_id, self.config.dataset);

        match command {
            Command::QueryToTable {
                table,
                target,
                query,
                if_exists,
                no_wait,
                backup,
                storage,
            } => {
                let destination = resolve_table(&self.config, &target, &table)?;
                let mut options = QueryOptions::new()
                    .with_if_exists(if_exists)
                    .with_block(!no_wait);
                if backup {
                    options = options.with_backup(self.storage_location(&storage)?);
                }

                let use_case = QueryToTableUseCase::new(self.warehouse.clone());
                let outcome = use_case
                    .execute(&query.resolve()?, &destination, &options)
                    .await?;

                if let Some(staged) = &outcome.backup {
                    println!("✓ Backed up previous table to {}", staged.destination_uri());
                }
                if no_wait {
                    println!("✓ Submitted job {} for {}", outcome.job.job_id, destination);
                } else {
                    println!("✓ Query results loaded to table {}", destination);
                }
            }

            Command::CreateView {
                view,
                target,
                query,
                update,
            } => {
                let view = resolve_table(&self.config, &target, &view)?;
                let use_case = CreateViewUseCase::new(self.warehouse.clone());
                use_case.execute(&query.resolve()?, &view, update).await?;
                println!("✓ View {} created", view);
            }

            Command::BackupTable {
                table,
                target,
                storage,
            } => {
                let table = resolve_table(&self.config, &target, &table)?;
                let location = self.storage_location(&storage)?;
                let use_case = BackupTableUseCase::new(self.warehouse.clone());
                let staged = use_case.execute(&table, &location).await?;
                println!("✓ Exported {} to {}", table, staged.destination_uri());
            }

            Command::ClearTable {
                table,
                target,
                delete_rows,
                no_wait,
            } => {
                let table = resolve_table(&self.config, &target, &table)?;
                let use_case = ClearTableUseCase::new(self.warehouse.clone());
                use_case.execute(&table, delete_rows, !no_wait).await?;
                if delete_rows {
                    println!("✓ Rows from table {} deleted", table);
                } else {
                    println!("✓ Table {} deleted", table);
                }
            }

            Command::QueryToGcs {
                query,
                table,
                target,
                storage,
                if_exists,
            } => {
                let staging =
                    resolve_table(&self.config, &target, &staging_table_name(table.as_deref()))?;
                let location = self.storage_location(&storage)?;
                let use_case = QueryToStorageUseCase::new(self.warehouse.clone());
                let staged = use_case
                    .execute(&query.resolve()?, &staging, &location, if_exists)
                    .await?;
                println!("✓ Query results exported to {}", staged.destination_uri());
            }

            Command::GcsToFrame { bucket, path, head } => {
                let use_case = StorageToDataFrameUseCase::new(self.storage.clone());
                let frame = use_case.execute_path(&bucket, &path).await?;
                print_frame(&frame, head)?;
            }

            Command::QueryToFrame {
                query,
                table,
                target,
                storage,
                if_exists,
                keep_files,
                head,
            } => {
                let staging =
                    resolve_table(&self.config, &target, &staging_table_name(table.as_deref()))?;
                let location = self.storage_location(&storage)?;
                let mut options = ExportOptions::new().with_if_exists(if_exists);
                if keep_files {
                    options = options.keep_files();
                }

                let use_case =
                    QueryToDataFrameUseCase::new(self.warehouse.clone(), self.storage.clone());
                let frame = use_case
                    .execute(&query.resolve()?, &staging, &location, &options)
                    .await?;
                print_frame(&frame, head)?;
            }
        }

        Ok(())
    }

    fn storage_location(&self, storage: &StorageArgs) -> Result<StorageLocation> {
        self.config
            .storage_location(storage.bucket.as_deref(), storage.directory.as_deref())
    }
}

fn print_frame(frame: &DataFrame, head: usize) -> Result<()> {
    println!(
        "✓ Loaded {} rows x {} columns",
        frame.num_rows(),
        frame.num_columns()
    );
    let rendered = frame.head_pretty(head).context("Failed to render rows")?;
    println!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> Config {
        Config {
            project_id: "proj".to_string(),
            dataset: "ds".to_string(),
            location: "US".to_string(),
            service_account_key_path: None,
            bucket: Some("bkt".to_string()),
            directory: Some("exports".to_string()),
            poll_interval_ms: 1000,
        }
    }

    #[test]
    fn test_resolve_table_defaults() {
        let table = resolve_table(&create_test_config(), &TargetArgs::default(), "t").unwrap();
        assert_eq!(table.to_string(), "proj.ds.t");
    }

    #[test]
    fn test_resolve_table_overrides() {
        let target = TargetArgs {
            project: Some("other".to_string()),
            dataset: Some("raw".to_string()),
        };
        let table = resolve_table(&create_test_config(), &target, "t").unwrap();
        assert_eq!(table.to_string(), "other.raw.t");
    }

    #[test]
    fn test_resolve_table_empty_name() {
        assert!(resolve_table(&create_test_config(), &TargetArgs::default(), "").is_err());
    }

    #[test]
    fn test_staging_table_name() {
        assert_eq!(staging_table_name(Some("mine")), "mine");

        let generated = staging_table_name(None);
        assert!(generated.starts_with("bqhelper_tmp_"));
        assert!(!generated.contains('-'));
    }
}
