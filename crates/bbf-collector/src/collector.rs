use std::collections::HashMap;
use std::time::Duration;

use bbf_core::{AppConfig, Business, Review, SearchQuery};
use chrono::Utc;

use crate::client::MapsClient;
use crate::demo::{demo_businesses, demo_reviews};
use crate::error::CollectorError;
use crate::parse::{parse_local_result, parse_review};

/// Listings returned per search page; a shorter page marks the last one.
pub const PAGE_SIZE: usize = 20;

#[derive(Clone)]
pub struct CollectorConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub request_delay_ms: u64,
}

impl CollectorConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            api_key: config.serpapi_key.clone(),
            base_url: config.search_base_url.clone(),
            timeout_secs: config.request_timeout_secs,
            user_agent: config.user_agent.clone(),
            request_delay_ms: config.request_delay_ms,
        }
    }
}

impl std::fmt::Debug for CollectorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectorConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("request_delay_ms", &self.request_delay_ms)
            .finish()
    }
}

/// Turns `(query, location)` pairs into normalized [`Business`] lists.
///
/// Results are cached per instance keyed by `(query, location)`; a repeated
/// search returns the cached list without touching the network.
pub struct Collector {
    client: Option<MapsClient>,
    request_delay: Duration,
    cache: HashMap<(String, String), Vec<Business>>,
}

impl Collector {
    /// Without an API key the collector runs in demo mode.
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError`] if the HTTP client cannot be built.
    pub fn new(config: CollectorConfig) -> Result<Self, CollectorError> {
        let client = match config.api_key.as_deref() {
            Some(key) => Some(MapsClient::with_base_url(
                key,
                config.timeout_secs,
                &config.user_agent,
                &config.base_url,
            )?),
            None => None,
        };
        Ok(Self {
            client,
            request_delay: Duration::from_millis(config.request_delay_ms),
            cache: HashMap::new(),
        })
    }

    #[must_use]
    pub fn is_demo(&self) -> bool {
        self.client.is_none()
    }

    /// Searches for up to `max_results` businesses.
    ///
    /// Transport and API failures end pagination early; whatever was gathered
    /// before the failure is returned.
    pub async fn search(&mut self, query: &str, location: &str, max_results: usize) -> Vec<Business> {
        let key = (query.to_string(), location.to_string());
        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(query, location, "using cached results");
            return cached.clone();
        }

        let mut businesses = match &self.client {
            None => {
                tracing::warn!("no search API key configured, using demo data");
                demo_businesses(query, location, Utc::now())
            }
            Some(client) => {
                let search = SearchQuery::new(query, location);
                fetch_all_pages(client, &search, max_results, self.request_delay).await
            }
        };
        businesses.truncate(max_results);

        tracing::info!(query, location, count = businesses.len(), "search complete");
        self.cache.insert(key, businesses.clone());
        businesses
    }

    /// Fetches up to `max_reviews` reviews for one listing.
    ///
    /// Demo mode returns the canned positive review set. Failures are logged
    /// and produce an empty list.
    pub async fn fetch_reviews(&self, place_id: &str, max_reviews: usize) -> Vec<Review> {
        let Some(client) = &self.client else {
            let mut reviews = demo_reviews(false);
            reviews.truncate(max_reviews);
            return reviews;
        };

        match client.reviews_page(place_id).await {
            Ok(page) => page
                .reviews
                .into_iter()
                .take(max_reviews)
                .filter_map(parse_review)
                .collect(),
            Err(e) => {
                tracing::warn!(place_id, error = %e, "review fetch failed");
                Vec::new()
            }
        }
    }
}

async fn fetch_all_pages(
    client: &MapsClient,
    search: &SearchQuery,
    max_results: usize,
    request_delay: Duration,
) -> Vec<Business> {
    let q = search.search_string();
    let scraped_at = Utc::now();
    let mut businesses: Vec<Business> = Vec::new();
    let mut start = 0usize;

    while businesses.len() < max_results {
        if start > 0 && !request_delay.is_zero() {
            tokio::time::sleep(request_delay).await;
        }

        let page = match client.search_page(&q, start).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(
                    q = %q,
                    start,
                    gathered = businesses.len(),
                    error = %e,
                    "search page failed, returning partial results"
                );
                break;
            }
        };

        let page_len = page.local_results.len();
        if page_len == 0 {
            break;
        }
        businesses.extend(
            page.local_results
                .into_iter()
                .filter_map(|raw| parse_local_result(raw, &search.location, scraped_at)),
        );
        tracing::debug!(start, page_len, total = businesses.len(), "fetched search page");

        if page_len < PAGE_SIZE {
            break;
        }
        start += PAGE_SIZE;
    }

    businesses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_config() -> CollectorConfig {
        CollectorConfig {
            api_key: None,
            base_url: "https://serpapi.com/search".to_string(),
            timeout_secs: 5,
            user_agent: "bbf-test/0.1".to_string(),
            request_delay_ms: 0,
        }
    }

    #[tokio::test]
    async fn demo_search_returns_five_fixed_ids() {
        let mut collector = Collector::new(demo_config()).unwrap();
        assert!(collector.is_demo());
        let businesses = collector.search("pool service", "Tampa, FL", 20).await;
        assert_eq!(businesses.len(), 5);
        assert_eq!(businesses[4].place_id, "demo_5");
    }

    #[tokio::test]
    async fn demo_search_respects_max_results() {
        let mut collector = Collector::new(demo_config()).unwrap();
        let businesses = collector.search("pool service", "Tampa, FL", 3).await;
        assert_eq!(businesses.len(), 3);
    }

    #[tokio::test]
    async fn repeated_search_is_served_from_cache() {
        let mut collector = Collector::new(demo_config()).unwrap();
        let first = collector.search("locksmith", "Reno, NV", 20).await;
        let second = collector.search("locksmith", "Reno, NV", 20).await;
        assert_eq!(first, second);
        assert_eq!(collector.cache.len(), 1);
    }

    #[tokio::test]
    async fn demo_reviews_are_positive() {
        let collector = Collector::new(demo_config()).unwrap();
        let reviews = collector.fetch_reviews("demo_1", 20).await;
        assert_eq!(reviews.len(), 5);
        assert!(reviews.iter().all(|r| r.rating >= 4));
        assert_eq!(collector.fetch_reviews("demo_1", 2).await.len(), 2);
    }
}
