use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub serpapi_key: Option<String>,
    pub apify_token: Option<String>,
    pub anthropic_key: Option<String>,
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub database_path: PathBuf,
    pub log_level: String,
    pub search_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub request_delay_ms: u64,
    pub max_results_per_query: usize,
    pub min_reviews_for_analysis: u32,
    pub high_opportunity_score: u8,
}

impl AppConfig {
    /// True when any search credential is configured.
    #[must_use]
    pub fn has_scraping_api(&self) -> bool {
        self.serpapi_key.is_some() || self.apify_token.is_some()
    }

    #[must_use]
    pub fn has_ai_api(&self) -> bool {
        self.anthropic_key.is_some()
    }

    /// Clamp a caller-requested result count to the configured ceiling.
    #[must_use]
    pub fn cap_results(&self, requested: usize) -> usize {
        requested.min(self.max_results_per_query)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "serpapi_key",
                &self.serpapi_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "apify_token",
                &self.apify_token.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "anthropic_key",
                &self.anthropic_key.as_ref().map(|_| "[redacted]"),
            )
            .field("data_dir", &self.data_dir)
            .field("output_dir", &self.output_dir)
            .field("database_path", &self.database_path)
            .field("log_level", &self.log_level)
            .field("search_base_url", &self.search_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("request_delay_ms", &self.request_delay_ms)
            .field("max_results_per_query", &self.max_results_per_query)
            .field("min_reviews_for_analysis", &self.min_reviews_for_analysis)
            .field("high_opportunity_score", &self.high_opportunity_score)
            .finish()
    }
}
