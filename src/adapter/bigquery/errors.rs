//! BigQuery Error Classification
//!
//! エラー分類とジョブ待機の設定

/// Lower bound for the job status polling interval
pub const MIN_POLL_INTERVAL_MS: u64 = 100;

/// Convert error chain to string including all causes
pub fn error_chain_to_string(e: &anyhow::Error) -> String {
    let mut messages = Vec::new();
    for cause in e.chain() {
        messages.push(cause.to_string());
    }
    messages.join(" | ")
}

/// Check if an error says the table, view or dataset does not exist (404)
pub fn is_not_found_error(error_msg: &str) -> bool {
    error_msg.contains("Not found")
        || error_msg.contains("not found")
        || error_msg.contains("notFound")
        || error_msg.contains("404")
}

/// Check if an error says the destination already exists (409)
pub fn is_already_exists_error(error_msg: &str) -> bool {
    error_msg.contains("Already Exists")
        || error_msg.contains("already exists")
        || error_msg.contains("duplicate")
        || error_msg.contains("409")
}

/// Clamp the configured polling interval
pub fn poll_interval_ms(configured: u64) -> u64 {
    configured.max(MIN_POLL_INTERVAL_MS)
}
