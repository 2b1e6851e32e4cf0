pub mod app_config;
pub mod config;
pub mod languages;
pub mod record;
pub mod scores;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use record::InterviewRecord;
pub use scores::{ScoreSet, ScoreSlot};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
