use crate::app_config::AppConfig;
use crate::ConfigError;

const DEFAULT_SEARCH_BASE_URL: &str = "https://serpapi.com/search";
const DEFAULT_USER_AGENT: &str = "bbf/0.1 (local-business-research)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
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
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional. Credentials that are unset or blank stay `None`
/// so callers can fall back to demo data instead of failing.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let optional = |var: &str| -> Option<String> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let or_default = |var: &str, default: &str| -> String {
        optional(var).unwrap_or_else(|| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
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

    let serpapi_key = optional("SERPAPI_KEY");
    let apify_token = optional("APIFY_API_TOKEN");
    let anthropic_key = optional("ANTHROPIC_API_KEY");

    let data_dir = PathBuf::from(or_default("BBF_DATA_DIR", "./data"));
    let output_dir = PathBuf::from(or_default("BBF_OUTPUT_DIR", "./output"));
    let database_path = optional("BBF_DATABASE_PATH")
        .map_or_else(|| data_dir.join("businesses.db"), PathBuf::from);
    let log_level = or_default("BBF_LOG_LEVEL", "info");

    let search_base_url = or_default("BBF_SEARCH_BASE_URL", DEFAULT_SEARCH_BASE_URL);
    let request_timeout_secs = parse_u64("BBF_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("BBF_USER_AGENT", DEFAULT_USER_AGENT);
    let request_delay_ms = parse_u64("BBF_REQUEST_DELAY_MS", "2000")?;
    let max_results_per_query = parse_usize("BBF_MAX_RESULTS_PER_QUERY", "100")?;
    let min_reviews_for_analysis = parse_u32("BBF_MIN_REVIEWS_FOR_ANALYSIS", "10")?;
    let high_opportunity_score = parse_score_threshold(&or_default(
        "BBF_HIGH_OPPORTUNITY_SCORE",
        "70",
    ))?;

    Ok(AppConfig {
        serpapi_key,
        apify_token,
        anthropic_key,
        data_dir,
        output_dir,
        database_path,
        log_level,
        search_base_url,
        request_timeout_secs,
        user_agent,
        request_delay_ms,
        max_results_per_query,
        min_reviews_for_analysis,
        high_opportunity_score,
    })
}

/// Parse the high-opportunity threshold, which must fall on the 0–100 score scale.
fn parse_score_threshold(raw: &str) -> Result<u8, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: "BBF_HIGH_OPPORTUNITY_SCORE".to_string(),
        reason,
    };
    let value = raw.parse::<u8>().map_err(|e| invalid(e.to_string()))?;
    if value > 100 {
        return Err(invalid(format!("{value} exceeds the 0-100 score scale")));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
