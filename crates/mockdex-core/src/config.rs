use crate::app_config::AppConfig;
use crate::ConfigError;

/// Desktop-browser user agent used for page fetches; the source site serves
/// the plain HTML document to this profile.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let links_path = PathBuf::from(or_default("MOCKDEX_LINKS_PATH", "./interview_links.csv"));
    let output_path = PathBuf::from(or_default(
        "MOCKDEX_OUTPUT_PATH",
        "./all_interviews_export.csv",
    ));
    let log_level = or_default("MOCKDEX_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("MOCKDEX_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("MOCKDEX_USER_AGENT", DEFAULT_USER_AGENT);
    let inter_request_delay_ms = parse_u64("MOCKDEX_INTER_REQUEST_DELAY_MS", "600")?;

    Ok(AppConfig {
        links_path,
        output_path,
        log_level,
        request_timeout_secs,
        user_agent,
        inter_request_delay_ms,
    })
}
