use std::path::PathBuf;

/// Runtime configuration for an export run, sourced from `MOCKDEX_*`
/// environment variables with defaults matching the reference collection
/// setup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// CSV of candidate URLs, one per row (first field only).
    pub links_path: PathBuf,
    /// Destination for the assembled interview table.
    pub output_path: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Pause between successful page fetches, respecting the remote
    /// service's request rate.
    pub inter_request_delay_ms: u64,
}
