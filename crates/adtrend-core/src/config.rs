use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_RENDER_BASE_URL: &str = "https://api.zenrows.com/v1/";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function,
/// so the parsing can be exercised with a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

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

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let render_api_key = require("ZENROWS_API_KEY")?;
    let render_base_url = or_default("ADTREND_RENDER_BASE_URL", DEFAULT_RENDER_BASE_URL);

    let request_timeout_secs = parse_u64("ADTREND_REQUEST_TIMEOUT_SECS", "180")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "ADTREND_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let scroll_repeats = parse_usize("ADTREND_SCROLL_REPEATS", "5")?;
    let scroll_pause_ms = parse_u64("ADTREND_SCROLL_PAUSE_MS", "3000")?;

    let snapshot_dir = Some(or_default("ADTREND_SNAPSHOT_DIR", "."))
        .filter(|dir| !dir.trim().is_empty())
        .map(PathBuf::from);

    let log_level = or_default("ADTREND_LOG_LEVEL", "info");

    Ok(AppConfig {
        render_api_key,
        render_base_url,
        request_timeout_secs,
        scroll_repeats,
        scroll_pause_ms,
        snapshot_dir,
        log_level,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
