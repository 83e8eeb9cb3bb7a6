//! BigQuery Job Builders
//!
//! ジョブ定義の組み立てとジョブ状態の解釈

use google_cloud_bigquery::http::job::{
    CreateDisposition, Job, JobConfiguration, JobConfigurationExtract,
    JobConfigurationExtractSource, JobConfigurationQuery, JobReference, JobState, JobType,
    WriteDisposition,
};
use google_cloud_bigquery::http::table::{DestinationFormat, TableReference};

use crate::domain::entities::{IfExists, TableRef};

/// Where a job stands after a status call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobProgress {
    Running,
    Done,
    Failed(String),
}

/// Map the if_exists policy onto BigQuery's write disposition
pub fn write_disposition(if_exists: IfExists) -> WriteDisposition {
    match if_exists {
        IfExists::Fail => WriteDisposition::WriteEmpty,
        IfExists::Replace => WriteDisposition::WriteTruncate,
        IfExists::Append => WriteDisposition::WriteAppend,
    }
}

pub fn table_reference(table: &TableRef) -> TableReference {
    TableReference {
        project_id: table.project_id().to_string(),
        dataset_id: table.dataset().to_string(),
        table_id: table.table().to_string(),
    }
}

/// Generate a client-side job id so the job can be tracked even when not waited on
pub fn new_job_id() -> String {
    format!("bqhelper_{}", uuid::Uuid::new_v4().simple())
}

fn job_reference(project_id: &str, location: &str, job_id: String) -> JobReference {
    JobReference {
        project_id: project_id.to_string(),
        job_id,
        location: Some(location.to_string()),
    }
}

/// Standard SQL query job.
///
/// With a destination the job creates the table if needed, allows large results and
/// applies the write disposition. Without one (DML, DDL) only the query is sent.
pub fn build_query_job(
    project_id: &str,
    location: &str,
    job_id: String,
    query: &str,
    destination: Option<&TableRef>,
    if_exists: IfExists,
) -> Job {
    let mut config = JobConfigurationQuery {
        query: query.to_string(),
        use_legacy_sql: Some(false),
        ..Default::default()
    };

    if let Some(dest) = destination {
        config.destination_table = Some(table_reference(dest));
        config.create_disposition = Some(CreateDisposition::CreateIfNeeded);
        config.write_disposition = Some(write_disposition(if_exists));
        config.allow_large_results = Some(true);
    }

    Job {
        job_reference: job_reference(project_id, location, job_id),
        configuration: JobConfiguration {
            job: JobType::Query(config),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Extract job writing the table as CSV files with a header row
pub fn build_extract_job(
    project_id: &str,
    location: &str,
    job_id: String,
    table: &TableRef,
    destination_uri: &str,
) -> Job {
    let config = JobConfigurationExtract {
        destination_uris: vec![destination_uri.to_string()],
        print_header: Some(true),
        field_delimiter: None,
        destination_format: Some(DestinationFormat::Csv),
        compression: None,
        use_avro_logical_types: None,
        model_extract_options: None,
        source: JobConfigurationExtractSource::SourceTable(table_reference(table)),
    };

    Job {
        job_reference: job_reference(project_id, location, job_id),
        configuration: JobConfiguration {
            job: JobType::Extract(config),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// DDL creating a standard SQL view
pub fn create_view_ddl(view: &TableRef, view_sql: &str) -> String {
    format!("CREATE VIEW {} AS\n{}", view.sql_identifier(), view_sql.trim())
}

/// Read the state and error result of a job
pub fn job_progress(job: &Job) -> JobProgress {
    match job.status.state {
        JobState::Done => match &job.status.error_result {
            Some(err) => JobProgress::Failed(
                err.message
                    .clone()
                    .or_else(|| err.reason.clone())
                    .unwrap_or_else(|| "unknown error".to_string()),
            ),
            None => JobProgress::Done,
        },
        _ => JobProgress::Running,
    }
}
