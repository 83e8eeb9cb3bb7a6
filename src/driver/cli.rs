//! CLI Argument Parsing
//!
//! CLIの引数解析

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::fs;

use crate::domain::entities::IfExists;

/// BigQuery のクエリ結果をテーブル・ビュー・GCS・DataFrame へ書き出すCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "bqhelper")]
#[command(about = "Materialize, back up and export BigQuery query results", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, default_value = "./bqhelper.json")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write query results to a table
    QueryToTable {
        /// Destination table name
        #[arg(long)]
        table: String,
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        query: QueryArgs,
        /// fail, replace or append
        #[arg(long, default_value = "fail")]
        if_exists: IfExists,
        /// Return right after submitting the job
        #[arg(long)]
        no_wait: bool,
        /// Back up an existing destination to GCS before replacing it
        #[arg(long)]
        backup: bool,
        #[command(flatten)]
        storage: StorageArgs,
    },

    /// Create (or with --update, redefine) a standard SQL view
    CreateView {
        /// View name
        #[arg(long)]
        view: String,
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        query: QueryArgs,
        /// Replace the view if it already exists
        #[arg(long)]
        update: bool,
    },

    /// Export a table to GCS as CSV
    BackupTable {
        #[arg(long)]
        table: String,
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        storage: StorageArgs,
    },

    /// Delete a table, or only its rows
    ClearTable {
        #[arg(long)]
        table: String,
        #[command(flatten)]
        target: TargetArgs,
        /// Keep the table and delete all rows
        #[arg(long)]
        delete_rows: bool,
        /// Do not wait for the DELETE job
        #[arg(long)]
        no_wait: bool,
    },

    /// Export query results to GCS through a staging table
    QueryToGcs {
        #[command(flatten)]
        query: QueryArgs,
        /// Staging table name (generated when omitted)
        #[arg(long)]
        table: Option<String>,
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        storage: StorageArgs,
        #[arg(long, default_value = "replace")]
        if_exists: IfExists,
    },

    /// Load a CSV file from GCS and print it
    GcsToFrame {
        #[arg(long)]
        bucket: String,
        /// Object path including the file name, e.g. downloads/some_file.csv
        #[arg(long)]
        path: String,
        /// Rows to print
        #[arg(long, default_value_t = 10)]
        head: usize,
    },

    /// Export query results through GCS and load them into memory
    QueryToFrame {
        #[command(flatten)]
        query: QueryArgs,
        /// Staging table name (generated when omitted)
        #[arg(long)]
        table: Option<String>,
        #[command(flatten)]
        target: TargetArgs,
        #[command(flatten)]
        storage: StorageArgs,
        #[arg(long, default_value = "replace")]
        if_exists: IfExists,
        /// Keep the exported files in GCS
        #[arg(long)]
        keep_files: bool,
        /// Rows to print
        #[arg(long, default_value_t = 10)]
        head: usize,
    },
}

/// Project and dataset overrides
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Project id (defaults to the configured project)
    #[arg(long)]
    pub project: Option<String>,
    /// Dataset (defaults to the configured dataset)
    #[arg(long)]
    pub dataset: Option<String>,
}

/// Query text, inline or from a file
#[derive(ClapArgs, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct QueryArgs {
    /// Standard SQL query
    #[arg(long)]
    pub query: Option<String>,
    /// File containing the query
    #[arg(long)]
    pub query_file: Option<String>,
}

impl QueryArgs {
    pub fn resolve(&self) -> Result<String> {
        match (&self.query, &self.query_file) {
            (Some(query), _) => Ok(query.clone()),
            (None, Some(path)) => fs::read_to_string(path)
                .with_context(|| format!("Failed to read query file {}", path)),
            (None, None) => anyhow::bail!("either --query or --query-file is required"),
        }
    }
}

/// Bucket and directory overrides
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct StorageArgs {
    /// GCS bucket (defaults to the configured bucket)
    #[arg(long)]
    pub bucket: Option<String>,
    /// Directory inside the bucket (defaults to the configured directory)
    #[arg(long)]
    pub directory: Option<String>,
}
