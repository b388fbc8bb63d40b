use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert!(cfg.serpapi_key.is_none());
    assert!(cfg.apify_token.is_none());
    assert!(cfg.anthropic_key.is_none());
    assert!(!cfg.has_scraping_api());
    assert!(!cfg.has_ai_api());
    assert_eq!(cfg.data_dir, PathBuf::from("./data"));
    assert_eq!(cfg.output_dir, PathBuf::from("./output"));
    assert_eq!(cfg.database_path, PathBuf::from("./data/businesses.db"));
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.search_base_url, "https://serpapi.com/search");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "bbf/0.1 (local-business-research)");
    assert_eq!(cfg.request_delay_ms, 2000);
    assert_eq!(cfg.max_results_per_query, 100);
    assert_eq!(cfg.min_reviews_for_analysis, 10);
    assert_eq!(cfg.high_opportunity_score, 70);
}

#[test]
fn blank_credentials_are_treated_as_absent() {
    let mut map = HashMap::new();
    map.insert("SERPAPI_KEY", "   ");
    map.insert("ANTHROPIC_API_KEY", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.serpapi_key.is_none());
    assert!(cfg.anthropic_key.is_none());
}

#[test]
fn either_search_credential_enables_scraping_api() {
    let mut map = HashMap::new();
    map.insert("APIFY_API_TOKEN", "apify-token");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.has_scraping_api());
    assert!(cfg.serpapi_key.is_none());

    let mut map = HashMap::new();
    map.insert("SERPAPI_KEY", "serp-key");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.has_scraping_api());
    assert_eq!(cfg.serpapi_key.as_deref(), Some("serp-key"));
}

#[test]
fn database_path_follows_data_dir_unless_overridden() {
    let mut map = HashMap::new();
    map.insert("BBF_DATA_DIR", "/srv/bbf");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.database_path, PathBuf::from("/srv/bbf/businesses.db"));

    map.insert("BBF_DATABASE_PATH", "/tmp/leads.db");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.database_path, PathBuf::from("/tmp/leads.db"));
}

#[test]
fn request_delay_override() {
    let mut map = HashMap::new();
    map.insert("BBF_REQUEST_DELAY_MS", "500");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.request_delay_ms, 500);
}

#[test]
fn request_delay_invalid() {
    let mut map = HashMap::new();
    map.insert("BBF_REQUEST_DELAY_MS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BBF_REQUEST_DELAY_MS"),
        "expected InvalidEnvVar(BBF_REQUEST_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn max_results_invalid() {
    let mut map = HashMap::new();
    map.insert("BBF_MAX_RESULTS_PER_QUERY", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BBF_MAX_RESULTS_PER_QUERY"),
        "expected InvalidEnvVar(BBF_MAX_RESULTS_PER_QUERY), got: {result:?}"
    );
}

#[test]
fn min_reviews_override() {
    let mut map = HashMap::new();
    map.insert("BBF_MIN_REVIEWS_FOR_ANALYSIS", "25");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.min_reviews_for_analysis, 25);
}

#[test]
fn high_opportunity_score_override() {
    let mut map = HashMap::new();
    map.insert("BBF_HIGH_OPPORTUNITY_SCORE", "85");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.high_opportunity_score, 85);
}

#[test]
fn high_opportunity_score_above_scale_fails() {
    let mut map = HashMap::new();
    map.insert("BBF_HIGH_OPPORTUNITY_SCORE", "101");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BBF_HIGH_OPPORTUNITY_SCORE"),
        "expected InvalidEnvVar(BBF_HIGH_OPPORTUNITY_SCORE), got: {result:?}"
    );
}

#[test]
fn cap_results_applies_ceiling() {
    let mut map = HashMap::new();
    map.insert("BBF_MAX_RESULTS_PER_QUERY", "40");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.cap_results(20), 20);
    assert_eq!(cfg.cap_results(500), 40);
}

#[test]
fn debug_output_redacts_credentials() {
    let mut map = HashMap::new();
    map.insert("SERPAPI_KEY", "super-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("[redacted]"));
}
