pub mod ads;
pub mod app_config;
pub mod config;

pub use ads::{
    AdRecord, Category, CategoryResult, TrendReport, UnknownCategory, MAX_RESULTS_PER_CATEGORY,
    SENTINEL, SUMMARY_MAX_CHARS, SUMMARY_PLACEHOLDER,
};
pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
