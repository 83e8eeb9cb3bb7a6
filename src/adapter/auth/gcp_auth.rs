//! GCP Authentication
//!
//! Google Cloud Platform認証機能

use anyhow::{Context, Result};
use google_cloud_bigquery::client::{Client, ClientConfig};
use log::info;

/// Expands tilde in path and returns the full path
pub fn expand_key_path(key_path: &str) -> String {
    shellexpand::tilde(key_path).to_string()
}

/// Points GOOGLE_APPLICATION_CREDENTIALS at the service account key, if one is configured.
///
/// Returns the expanded path. Without a key path, Application Default Credentials are used.
pub fn apply_service_account(key_path: Option<&str>) -> Option<String> {
    let expanded = key_path.map(expand_key_path)?;
    std::env::set_var("GOOGLE_APPLICATION_CREDENTIALS", &expanded);
    info!("Using service account key {}", expanded);
    Some(expanded)
}

/// Creates a BigQuery client with service account authentication
pub async fn create_bigquery_client(key_path: Option<&str>) -> Result<Client> {
    apply_service_account(key_path);

    let (config, _project_id) = ClientConfig::new_with_auth()
        .await
        .context("Failed to authenticate with Google Cloud")?;

    let client = Client::new(config)
        .await
        .context("Failed to create BigQuery client")?;

    Ok(client)
}
