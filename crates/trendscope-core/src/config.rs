use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a working
/// config pointed at the public Reddit search endpoint.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, raw: &str| -> Result<u64, ConfigError> {
        raw.trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let live_base_url = parse_base_url(&or_default(
        "TRENDSCOPE_LIVE_BASE_URL",
        "https://www.reddit.com",
    ))?;
    let user_agent = or_default("TRENDSCOPE_USER_AGENT", "trendscope/0.1 (trend-search)");
    let live_timeout_secs = parse_u64(
        "TRENDSCOPE_LIVE_TIMEOUT_SECS",
        &or_default("TRENDSCOPE_LIVE_TIMEOUT_SECS", "0"),
    )?;
    let log_level = or_default("TRENDSCOPE_LOG_LEVEL", "info");
    let seed = match lookup("TRENDSCOPE_SEED") {
        Ok(raw) if !raw.trim().is_empty() => Some(parse_u64("TRENDSCOPE_SEED", &raw)?),
        _ => None,
    };

    Ok(AppConfig {
        live_base_url,
        user_agent,
        live_timeout_secs,
        log_level,
        seed,
    })
}

/// Validate the live endpoint base URL and strip any trailing slash.
fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "TRENDSCOPE_LIVE_BASE_URL".to_string(),
            reason: format!("expected an http(s) URL, got {raw:?}"),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
