//! bqhelper - BigQuery helper CLI
//!
//! クエリ結果のテーブル化、バックアップ、GCS経由のエクスポート

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use bqhelper::adapter::config::Config;
use bqhelper::driver::{Args, HelperWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load(&args.config)?;

    // Create workflow with injected dependencies
    let workflow = HelperWorkflow::connect(config).await?;

    workflow.execute(args.command).await
}
