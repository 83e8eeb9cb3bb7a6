//! Configuration File
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::domain::entities::StorageLocation;

fn default_location() -> String {
    "US".to_string()
}

fn default_poll_interval_ms() -> u64 {
    1000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub project_id: String,
    pub dataset: String,
    #[serde(default = "default_location")]
    pub location: String,

    // Authentication (falls back to Application Default Credentials)
    #[serde(default)]
    pub service_account_key_path: Option<String>,

    // Default staging area for backups and exports
    #[serde(default)]
    pub bucket: Option<String>,
    #[serde(default)]
    pub directory: Option<String>,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        Ok(config)
    }

    /// Storage location built from CLI overrides, falling back to the configured defaults.
    pub fn storage_location(
        &self,
        bucket: Option<&str>,
        directory: Option<&str>,
    ) -> Result<StorageLocation> {
        let bucket = bucket
            .or(self.bucket.as_deref())
            .context("No bucket given (set --bucket or \"bucket\" in the config)")?;
        let directory = directory.or(self.directory.as_deref()).unwrap_or_default();
        Ok(StorageLocation::new(bucket, directory)?)
    }
}
