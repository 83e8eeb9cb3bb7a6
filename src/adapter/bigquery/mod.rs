//! BigQuery Adapter Modules
//!
//! BigQuery統合のためのアダプターモジュール

pub mod client;
pub mod errors;
pub mod jobs;
